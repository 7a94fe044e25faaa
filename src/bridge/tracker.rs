use crate::domain::track::Track;

/// Compares a fresh snapshot against the previous one.
///
/// Returns whether the track changed and the snapshot to forward. When the
/// title is unchanged, non-empty artwork and track urls of `previous` are
/// copied onto `current`. Duration and position always stay fresh.
pub fn diff(previous: &Track, mut current: Track) -> (bool, Track) {
    if !current.same_track(previous) {
        return (true, current);
    }

    if !previous.artwork_url.is_empty() {
        current.artwork_url = previous.artwork_url.clone();
    }
    if !previous.track_url.is_empty() {
        current.track_url = previous.track_url.clone();
    }

    (false, current)
}

/// Holds the track forwarded on the previous tick
#[derive(Debug, Default)]
pub struct ChangeTracker {
    previous: Track,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self, current: Track) -> (bool, Track) {
        diff(&self.previous, current)
    }

    /// remembers `track` as the one forwarded this tick
    pub fn commit(&mut self, track: Track) {
        self.previous = track;
    }

    /// forgets the previous track, so the next snapshot always counts as a change
    pub fn reset(&mut self) {
        self.previous = Track::default();
    }
}
