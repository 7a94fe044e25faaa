//! Response of the `track.getInfo` method
//!
//! Only the fields the bridge reads are modelled. Every field defaults, since
//! last.fm leaves out whatever it does not know about a track.

use serde::Deserialize;

use crate::lastfm::error::LookupError;

#[derive(Debug, Deserialize)]
pub struct TrackInfoResponse {
    #[serde(default)]
    pub track: Option<LastFmTrack>,
    #[serde(default)]
    pub error: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LastFmTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub album: LastFmAlbum,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LastFmAlbum {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    /// ordered from smallest to largest
    #[serde(default, rename = "image")]
    pub images: Vec<LastFmImage>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LastFmImage {
    #[serde(default, rename = "#text")]
    pub url: String,
    #[serde(default)]
    pub size: String,
}

impl LastFmTrack {
    /// url of the largest album image, empty when there are none
    pub fn artwork_url(&self) -> &str {
        self.album
            .images
            .last()
            .map(|image| image.url.as_str())
            .unwrap_or_default()
    }
}

pub fn parse_track_info(body: &str) -> Result<LastFmTrack, LookupError> {
    let response: TrackInfoResponse = serde_json::from_str(body)?;

    if let Some(code) = response.error {
        return Err(LookupError::Api {
            code,
            message: response.message.unwrap_or_default(),
        });
    }

    response.track.ok_or(LookupError::NoTrack)
}
