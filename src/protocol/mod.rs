//! Serial control protocol: line framing and command grammar.
//!
//! Wire format is `\n`-delimited ASCII text in both directions:
//!
//! ```text
//! UI ──▶  START:<rpm>:<duration_ms>\n   STOP\n   PING\n   STATUS\n ...
//! UI ◀──  ACK:*\n   STATE:*\n   PONG\n   ERROR:UNKNOWN_COMMAND:*\n
//!         {"state":...,"currentRPM":0,...}\n
//! ```
//!
//! [`line::LineAccumulator`] reassembles the byte stream into trimmed
//! command lines; [`command::parse`] tokenizes a line into the closed
//! [`command::Command`] enumeration. Dispatch lives in
//! [`crate::app::service::Controller`].

pub mod command;
pub mod line;

pub use command::Command;
pub use line::LineAccumulator;
