use crate::{
    domain::track::{Track, micros_to_millis},
    player::{
        bus::PlayerBus,
        error::ExtractError,
        metadata::{ALBUM, ARTIST, LENGTH, TITLE},
    },
};

/// Reads the current track of the player owned by `service`.
///
/// Only a failure to read the metadata bag is an error. Missing or mistyped
/// fields read as empty, and an unreadable position reads as zero.
pub fn extract<B: PlayerBus + ?Sized>(bus: &B, service: &str) -> Result<Track, ExtractError> {
    let metadata = bus
        .metadata(service)
        .map_err(ExtractError::PropertyUnavailable)?;

    let position_ms = match bus.position(service) {
        Ok(position) => micros_to_millis(position.as_integer().unwrap_or(0)),
        Err(e) => {
            log::warn!("Failed getting playback position of {service}, using 0: {e}");
            0
        }
    };

    Ok(Track {
        title: metadata.text(TITLE),
        album: metadata.text(ALBUM),
        artist: metadata.first_text(ARTIST),
        artwork_url: String::new(),
        track_url: String::new(),
        duration_ms: micros_to_millis(metadata.integer(LENGTH)),
        position_ms,
    })
}
