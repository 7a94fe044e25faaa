//! Artwork lookup through the last.fm `track.getInfo` API

pub mod client;
pub mod error;
pub mod models;
pub mod resolver;
