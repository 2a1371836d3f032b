pub mod engine;
pub mod error;

pub mod momentum;

pub use engine::IndicatorEngine;
pub use error::IndicatorError;
