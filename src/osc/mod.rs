//! Outbound OSC messages to the receiver

pub mod client;
pub mod error;
pub mod forward;
