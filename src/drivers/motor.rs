//! Centrifuge motor output driver.
//!
//! Single LEDC PWM channel into the motor driver stage. This is a dumb
//! actuator: duty in, modulated output out. No feedback, no ramping —
//! the real firmware replaces this with the closed-loop drive.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct MotorDriver {
    hw_duty: u8,
}

impl MotorDriver {
    pub fn new() -> Self {
        Self { hw_duty: 0 }
    }

    /// Write a duty level (0–255) to the output. Zero de-energizes the
    /// driver stage completely.
    pub fn set(&mut self, duty: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR, duty);
        self.hw_duty = duty;
    }

    /// The duty level most recently written to the hardware.
    pub fn current_duty(&self) -> u8 {
        self.hw_duty
    }
}

impl Default for MotorDriver {
    fn default() -> Self {
        Self::new()
    }
}
