//! GPIO / peripheral pin assignments for the stub bench board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Motor driver stage (single PWM channel to the gate driver)
// ---------------------------------------------------------------------------

/// LEDC PWM output to the motor driver stage.
pub const MOTOR_PWM_GPIO: i32 = 1;
/// Motor PWM carrier frequency (Hz).
pub const MOTOR_PWM_FREQ_HZ: u32 = 25_000;

// ---------------------------------------------------------------------------
// Control UART (line-delimited text link to the desktop UI)
// ---------------------------------------------------------------------------

/// UART peripheral number used for the control link.
pub const CONTROL_UART_NUM: i32 = 0;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
