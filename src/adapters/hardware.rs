//! Hardware adapter — bridges the motor driver to the domain port.
//!
//! The only module besides `adapters::uart` that touches actual
//! hardware. On non-espidf targets the underlying driver uses
//! cfg-gated simulation stubs.

use crate::app::ports::ActuatorPort;
use crate::drivers::motor::MotorDriver;

/// Concrete adapter wrapping the motor output behind [`ActuatorPort`].
pub struct HardwareAdapter {
    motor: MotorDriver,
}

impl HardwareAdapter {
    pub fn new(motor: MotorDriver) -> Self {
        Self { motor }
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_duty(&mut self, duty: u8) {
        self.motor.set(duty);
    }

    fn current_duty(&self) -> u8 {
        self.motor.current_duty()
    }
}
