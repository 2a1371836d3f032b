//! Sentiment scoring and aggregation over news snippets.

pub mod aggregator;
pub mod error;
pub mod lexicon;
pub mod preprocess;
pub mod scorer;

pub use aggregator::{plurality, summarize, SentimentAggregator};
pub use error::SentimentError;
pub use lexicon::LexiconScorer;
pub use preprocess::preprocess_text;
pub use scorer::PolarityScorer;
