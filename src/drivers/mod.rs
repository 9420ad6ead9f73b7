//! Hardware driver layer.
//!
//! Dumb actuator drivers plus one-shot peripheral init. Everything here
//! is dual-target: real register writes on ESP-IDF, in-memory state
//! tracking on the host.

pub mod hw_init;
pub mod motor;
