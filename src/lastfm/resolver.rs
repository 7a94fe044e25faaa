use crate::{
    domain::track::ResolvedArtwork,
    lastfm::{
        client::{TrackInfoSource, TrackQuery},
        models::parse_track_info,
    },
};

/// Finds album artwork and the canonical track url for a track.
///
/// Makes one attempt per call and never fails: anything that goes wrong is
/// logged and yields an empty [`ResolvedArtwork`].
pub struct ArtworkResolver<S> {
    source: S,
}

impl<S: TrackInfoSource> ArtworkResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn resolve(&self, title: &str, album: &str, artist: &str) -> ResolvedArtwork {
        let query = TrackQuery {
            title,
            album,
            artist,
        };

        let track = match self
            .source
            .fetch(&query)
            .and_then(|body| parse_track_info(&body))
        {
            Ok(track) => track,
            Err(e) => {
                log::warn!("Last.fm lookup for {title} by {artist} failed: {e}");
                return ResolvedArtwork::default();
            }
        };

        ResolvedArtwork {
            artwork_url: track.artwork_url().to_string(),
            track_url: track.url,
        }
    }
}
