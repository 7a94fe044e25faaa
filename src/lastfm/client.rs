use crate::{config::LastFmConfig, lastfm::error::LookupError};

pub const API_ROOT: &str = "https://ws.audioscrobbler.com/2.0/";

/// What to look up
#[derive(Debug, Clone, Copy)]
pub struct TrackQuery<'a> {
    pub title: &'a str,
    pub album: &'a str,
    pub artist: &'a str,
}

/// Source of raw `track.getInfo` responses
pub trait TrackInfoSource {
    fn fetch(&self, query: &TrackQuery<'_>) -> Result<String, LookupError>;
}

/// Blocking last.fm HTTP client
pub struct LastFmClient {
    agent: ureq::Agent,
    api_key: String,
    username: Option<String>,
}

impl LastFmClient {
    pub fn new(config: &LastFmConfig) -> Result<Self, LookupError> {
        let api_key = config.api_key().ok_or(LookupError::MissingApiKey)?;
        let timeout = config.timeout();

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(concat!("squeaknp/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self {
            agent,
            api_key: api_key.to_string(),
            username: config.username().map(str::to_string),
        })
    }

    /// builds the `track.getInfo` url; album and username are only sent when present
    pub fn request_url(&self, query: &TrackQuery<'_>) -> String {
        let mut params = vec![
            ("method", "track.getInfo"),
            ("api_key", self.api_key.as_str()),
            ("artist", query.artist),
            ("track", query.title),
        ];
        if !query.album.is_empty() {
            params.push(("album", query.album));
        }
        if let Some(username) = &self.username {
            params.push(("username", username.as_str()));
        }
        params.push(("format", "json"));

        let mut url = API_ROOT.to_string();
        url.push('?');
        for (index, (key, value)) in params.iter().enumerate() {
            if index > 0 {
                url.push('&');
            }
            url.push_str(key);
            url.push('=');
            url.push_str(urlencoding::encode(value).as_ref());
        }
        url
    }
}

impl TrackInfoSource for LastFmClient {
    fn fetch(&self, query: &TrackQuery<'_>) -> Result<String, LookupError> {
        let response = self
            .agent
            .get(&self.request_url(query))
            .set("Accept", "application/json")
            .call()?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(LookupError::Status(status));
        }

        Ok(response.into_string()?)
    }
}
