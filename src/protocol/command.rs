//! Command grammar tokenizer.
//!
//! Turns a trimmed command line into the closed [`Command`]
//! enumeration. Exact keywords go through a lookup table; `START:` is
//! the single prefix rule — its RPM/duration payload is accepted
//! verbatim and never parsed, because this stub has nothing to do with
//! the values (a richer controller would validate them here).
//!
//! Matching is exact and case-sensitive, same as the wire protocol the
//! desktop UI already speaks.

/// Commands the desktop UI can send into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `START:<rpm>:<duration_ms>` — spin up. Payload ignored.
    Start,
    /// `STOP` — spin down.
    Stop,
    /// `PING` — watchdog keepalive, answered with `PONG`.
    Ping,
    /// `STATUS` — request an immediate status record.
    Status,
    /// `CLEAR_ERROR` — accepted unconditionally; this stub has no
    /// error state, the command exists for wire compatibility with
    /// the real controller.
    ClearError,
}

/// Prefix rule for the one command that carries a payload.
const START_PREFIX: &str = "START:";

/// Exact-keyword lookup table.
const KEYWORDS: &[(&str, Command)] = &[
    ("STOP", Command::Stop),
    ("PING", Command::Ping),
    ("STATUS", Command::Status),
    ("CLEAR_ERROR", Command::ClearError),
];

/// Tokenize a trimmed command line.
///
/// Returns `None` for anything outside the grammar — the dispatcher
/// reports those as `ERROR:UNKNOWN_COMMAND:<line>`.
pub fn parse(line: &str) -> Option<Command> {
    if line.starts_with(START_PREFIX) {
        return Some(Command::Start);
    }
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == line)
        .map(|(_, cmd)| *cmd)
}
