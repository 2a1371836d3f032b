use thiserror::Error;

/// Opaque acquisition failure for one identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("malformed data for '{symbol}': {message}")]
    Malformed { symbol: String, message: String },
}
