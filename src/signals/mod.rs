//! Display tags for indicator readings.

pub mod classification;

pub use classification::{RsiZone, TrendSignal};
