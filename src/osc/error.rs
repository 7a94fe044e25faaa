use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to encode OSC message for {address}: {reason}")]
    Encode { address: String, reason: String },

    #[error("socket error: {0}")]
    Socket(#[from] std::io::Error),
}
