//! Controller — the protocol core.
//!
//! [`Controller`] owns every piece of mutable protocol state: the
//! two-state machine, the receive-line accumulator, and the last
//! status-emit timestamp. The main loop owns one `Controller` and
//! threads it through each iteration — no file-scope singletons.
//!
//! ```text
//!  UART bytes ──▶ ┌────────────────────────┐ ──▶ ResponseSink
//!                 │       Controller        │
//!  ActuatorPort ◀─│  accumulate · dispatch  │
//!                 │  · report status        │
//!                 └────────────────────────┘
//! ```
//!
//! Dispatch is deliberately unguarded: `START:` is re-applied in full
//! when already running (re-emits ACK/STATE, rewrites the duty), and
//! `STOP` behaves symmetrically when already idle. The UI relies on
//! that idempotence during reconnects.

use log::{info, warn};

use crate::config::StubConfig;
use crate::protocol::command::{self, Command};
use crate::protocol::line::LineAccumulator;

use super::ports::{ActuatorPort, ResponseSink};
use super::status::StatusSnapshot;

// ───────────────────────────────────────────────────────────────
// Run state
// ───────────────────────────────────────────────────────────────

/// The sole persistent entity: {IDLE, RUNNING}, mutated only by the
/// dispatcher on START/STOP. PWM duty is a pure function of this value
/// — there is no ramp state and no third value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

impl RunState {
    /// Wire name, as reported in `STATE:*` lines and the status record.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
        }
    }

    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// Protocol controller: line accumulation, command dispatch, and the
/// periodic status reporter.
pub struct Controller {
    state: RunState,
    rx: LineAccumulator,
    /// Millisecond timestamp of the last autonomous status record.
    /// Compared with `wrapping_sub` so u32 clock wraparound cannot
    /// stall or skip the reporter.
    last_status_ms: u32,
    config: StubConfig,
}

impl Controller {
    pub fn new(config: StubConfig) -> Self {
        Self {
            state: RunState::Idle,
            rx: LineAccumulator::new(),
            last_status_ms: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce readiness: force the actuator to a known-off level,
    /// emit the one-time boot banner, and seed the status timer.
    pub fn start(
        &mut self,
        now_ms: u32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl ResponseSink,
    ) {
        hw.set_duty(0);
        self.last_status_ms = now_ms;
        sink.send_line("System Ready");
        info!("controller ready, state={}", self.state.name());
    }

    // ── Input path ────────────────────────────────────────────

    /// Drain one batch of received bytes through the accumulator,
    /// dispatching each completed line to full response completion
    /// before considering the next.
    pub fn feed(
        &mut self,
        bytes: &[u8],
        hw: &mut impl ActuatorPort,
        sink: &mut impl ResponseSink,
    ) {
        for &byte in bytes {
            if let Some(line) = self.rx.push(byte) {
                self.handle_line(&line, hw, sink);
            }
        }
    }

    /// Dispatch one trimmed command line.
    pub fn handle_line(
        &mut self,
        line: &str,
        hw: &mut impl ActuatorPort,
        sink: &mut impl ResponseSink,
    ) {
        match command::parse(line) {
            Some(Command::Start) => {
                // Payload after `START:` is ignored by design — the
                // stub has no speed loop to hand it to.
                self.state = RunState::Running;
                hw.set_duty(self.config.run_duty);
                sink.send_line("ACK:START");
                sink.send_line("STATE:RUNNING");
                info!("START accepted, duty={}", self.config.run_duty);
            }
            Some(Command::Stop) => {
                self.state = RunState::Idle;
                hw.set_duty(0);
                sink.send_line("ACK:STOP");
                sink.send_line("STATE:IDLE");
                info!("STOP accepted");
            }
            Some(Command::Ping) => {
                sink.send_line("PONG");
            }
            Some(Command::Status) => {
                self.emit_status(sink);
            }
            Some(Command::ClearError) => {
                // No error state exists to clear; ACK keeps the wire
                // protocol compatible with the real controller.
                sink.send_line("ACK:CLEAR_ERROR");
            }
            None => {
                sink.send_line(&format!("ERROR:UNKNOWN_COMMAND:{line}"));
            }
        }
    }

    // ── Status reporter ───────────────────────────────────────

    /// Emit an autonomous status record if the configured interval has
    /// elapsed since the last one. Call once per main-loop iteration.
    pub fn poll_status(&mut self, now_ms: u32, sink: &mut impl ResponseSink) {
        if now_ms.wrapping_sub(self.last_status_ms) >= self.config.status_interval_ms {
            self.emit_status(sink);
            self.last_status_ms = now_ms;
        }
    }

    /// Derive the status record from the current state. Stateless —
    /// recomputed on every call, never cached.
    pub fn build_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            state: self.state.name(),
            current_rpm: 0,
            target_rpm: 0,
            pwm: self.mapped_duty(),
            running: self.state.is_running(),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The duty level implied by the current state.
    pub fn mapped_duty(&self) -> u8 {
        match self.state {
            RunState::Idle => 0,
            RunState::Running => self.config.run_duty,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_status(&self, sink: &mut impl ResponseSink) {
        match serde_json::to_string(&self.build_snapshot()) {
            Ok(json) => sink.send_line(&json),
            Err(e) => warn!("status record serialisation failed: {}", e),
        }
    }
}
