//! Status record — the fixed-schema snapshot the desktop UI polls.
//!
//! Wire schema (field order matters, the UI parses it as-is):
//!
//! ```text
//! {"state":"RUNNING","currentRPM":0,"targetRPM":0,"pwm":128,"running":true}
//! ```
//!
//! The snapshot is derived, stateless data: recomputed from the
//! current [`RunState`](super::service::RunState) on every emission,
//! never stored. Both RPM fields are always 0 — this stub has no
//! tachometer and tracks no target.

use serde::Serialize;

/// A point-in-time status record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusSnapshot {
    /// State name, `"IDLE"` or `"RUNNING"`.
    pub state: &'static str,
    /// Measured RPM — always 0, no sensing capability exists.
    #[serde(rename = "currentRPM")]
    pub current_rpm: u16,
    /// Target RPM — always 0, the START payload is never parsed.
    #[serde(rename = "targetRPM")]
    pub target_rpm: u16,
    /// PWM duty level currently mapped from the state (0–255).
    pub pwm: u8,
    /// True iff the state is RUNNING.
    pub running: bool,
}
