//! System configuration parameters
//!
//! All tunable parameters for the protocol stub. There is no persistent
//! storage — the defaults below are the compile-time configuration the
//! spec talks about, kept in one struct so the UI team can tweak them
//! in a single place.

use serde::{Deserialize, Serialize};

/// Core stub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubConfig {
    // --- Actuator ---
    /// PWM duty level (0-255) applied while RUNNING
    pub run_duty: u8,

    // --- Timing ---
    /// Autonomous status record interval (milliseconds)
    pub status_interval_ms: u32,

    // --- Serial link ---
    /// UART baud rate for the control link
    pub uart_baud: u32,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            // Actuator
            run_duty: 128, // half power — safe on the bench supply

            // Timing
            status_interval_ms: 200, // 5 Hz keeps the UI display fresh

            // Serial link
            uart_baud: 115_200,
        }
    }
}
