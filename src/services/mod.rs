//! Data acquisition interfaces and the fixture-backed implementation.

pub mod error;
pub mod fixtures;
pub mod market_data;
pub mod news;

pub use error::ProviderError;
pub use fixtures::{FixtureDocument, FixtureStore};
pub use market_data::{Lookback, PriceEntry, PriceHistoryProvider};
pub use news::{NewsEntry, NewsProvider};
