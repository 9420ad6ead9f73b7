//! Bounded line accumulator.
//!
//! Consumes the control UART byte stream one byte at a time and yields
//! complete, whitespace-trimmed command lines on `\n`. Handles partial
//! reads gracefully — a single UART drain may deliver part of a line,
//! or several lines concatenated.
//!
//! The buffer is fixed-capacity. A line longer than [`LINE_CAPACITY`]
//! is discarded in full (reject-and-warn): the excess bytes are
//! dropped, a warning is logged when the terminator finally arrives,
//! and the accumulator resynchronizes on the next line. Nothing is
//! ever yielded for an oversized line.

use log::warn;

/// Maximum accepted command-line length in bytes, terminator excluded.
/// The longest legal command (`START:<rpm>:<duration_ms>`) fits in
/// well under half of this.
pub const LINE_CAPACITY: usize = 128;

/// A completed, trimmed command line.
pub type Line = heapless::String<LINE_CAPACITY>;

/// Streaming line accumulator.
pub struct LineAccumulator {
    buf: heapless::Vec<u8, LINE_CAPACITY>,
    overflowed: bool,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Some(line)` when `byte` terminates a non-empty,
    /// well-formed line. The internal buffer is cleared before
    /// returning, so the yielded line is never retained across calls.
    pub fn push(&mut self, byte: u8) -> Option<Line> {
        if byte == b'\n' {
            return self.complete();
        }
        if self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
        None
    }

    fn complete(&mut self) -> Option<Line> {
        let overflowed = core::mem::take(&mut self.overflowed);
        let line = if overflowed {
            warn!(
                "serial: line exceeded {} bytes, discarded",
                LINE_CAPACITY
            );
            None
        } else {
            match core::str::from_utf8(&self.buf) {
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        // Bare \r\n or whitespace-only — the UI's
                        // reader skips these too.
                        None
                    } else {
                        let mut out = Line::new();
                        // Trimmed text can only be shorter than the buffer.
                        let _ = out.push_str(trimmed);
                        Some(out)
                    }
                }
                Err(_) => {
                    warn!("serial: discarding non-UTF-8 line");
                    None
                }
            }
        };
        self.buf.clear();
        line
    }
}

impl Default for LineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
