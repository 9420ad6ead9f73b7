//! Centristub firmware library.
//!
//! Serial-protocol stand-in for the centrifuge motor controller: a
//! two-state dispatcher drives a single PWM output so the desktop UI
//! can be developed against the real wire protocol before the
//! closed-loop firmware (PID, tachometer, interlocks) exists.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod protocol;

pub mod pins;

// Re-export the ESPidf-only modules so the crate compiles; the actual
// implementations are guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
