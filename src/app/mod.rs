//! Application core — dispatcher, status reporter, and the port traits
//! that keep it hardware-agnostic.

pub mod ports;
pub mod service;
pub mod status;

pub use service::{Controller, RunState};
pub use status::StatusSnapshot;
