use std::fmt::Display;

/// Represent the track currently loaded in the media player
///
/// A fresh value is built on every poll tick. Only `artwork_url` and
/// `track_url` may be carried over from the previous tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub artwork_url: String,
    pub track_url: String,
    pub duration_ms: u64,
    pub position_ms: u64,
}

impl Track {
    /// Two snapshots describe the same track when their titles match.
    ///
    /// Artist or album changes under an identical title are not detected.
    pub fn same_track(&self, other: &Track) -> bool {
        self.title == other.title
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {} in {}", self.title, self.artist, self.album)
    }
}

/// Artwork and canonical url found by the remote lookup.
///
/// Empty strings mean "unresolved".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArtwork {
    pub artwork_url: String,
    pub track_url: String,
}

impl ResolvedArtwork {
    pub fn is_empty(&self) -> bool {
        self.artwork_url.is_empty() && self.track_url.is_empty()
    }
}

/// converts a microsecond value reported by the player to milliseconds, truncating
///
/// Negative values are clamped to zero.
pub fn micros_to_millis(micros: i64) -> u64 {
    u64::try_from(micros / 1000).unwrap_or(0)
}
