use thiserror::Error;

/// SDK errors.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a readable response (unreachable host,
    /// timeout, body that is not the expected JSON).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
