//! Access to the media player over d-bus (MPRIS)

pub mod bus;
pub mod error;
pub mod locator;
pub mod metadata;
pub mod snapshot;
