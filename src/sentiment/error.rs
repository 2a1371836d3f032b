use thiserror::Error;

/// Failure to score one snippet. Never fatal to a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SentimentError {
    #[error("unscoreable snippet: {0}")]
    InvalidInput(String),
}
