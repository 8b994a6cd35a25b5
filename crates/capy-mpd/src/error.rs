//! Error types for capy-mpd

/// MPD client errors
#[derive(Debug, thiserror::Error)]
pub enum MpdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No address resolved for {0}")]
    NoAddress(String),

    #[error("Unexpected greeting: {0:?}")]
    Handshake(String),

    #[error("Server error: {0}")]
    Ack(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}
