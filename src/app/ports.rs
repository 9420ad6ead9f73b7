//! Port traits — the boundary between protocol logic and the outside world.
//!
//! ```text
//!   UartLink ──▶ bytes ──▶ Controller ──▶ ActuatorPort ──▶ MotorDriver
//!                              │
//!                              └────────▶ ResponseSink ──▶ UartLink
//! ```
//!
//! Driven adapters (motor PWM, UART writer) implement these traits.
//! The [`Controller`](super::service::Controller) consumes them via
//! generics, so the protocol core never touches hardware directly and
//! the whole command path runs under host-side tests with mocks.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the dispatcher calls this to command the motor
/// output.
pub trait ActuatorPort {
    /// Set the PWM duty level (0–255). Writing 0 fully de-energizes
    /// the driver stage. Infallible — there is no fault detection in
    /// this stub.
    fn set_duty(&mut self, duty: u8);

    /// The duty level most recently written.
    fn current_duty(&self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Response sink port (driven adapter: domain → serial link)
// ───────────────────────────────────────────────────────────────

/// The dispatcher emits protocol responses through this port, one
/// line per call. The adapter appends the `\n` terminator.
pub trait ResponseSink {
    fn send_line(&mut self, line: &str);
}
