use thiserror::Error;

/// Failures raised by the indicator engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("price series is empty")]
    InsufficientData,
    #[error("invalid price input: {0}")]
    InvalidInput(String),
    #[error("invalid indicator configuration: {0}")]
    InvalidConfig(String),
}
