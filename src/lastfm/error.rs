use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("response failed with status code {0}")]
    Status(u16),

    #[error("failed to read response: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("last.fm error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("response has no track")]
    NoTrack,

    #[error("no last.fm api key configured")]
    MissingApiKey,
}

impl From<ureq::Error> for LookupError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => LookupError::Status(code),
            ureq::Error::Transport(transport) => LookupError::Transport(transport.to_string()),
        }
    }
}
