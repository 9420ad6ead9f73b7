//! Adapters — bridge real peripherals to the domain port traits.

pub mod hardware;
pub mod time;
pub mod uart;
