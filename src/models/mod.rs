//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod report;
pub mod sentiment;

pub use indicators::{
    IndicatorReport, IndicatorResult, MacdIndicator, PricePoint, PriceSeries, RsiIndicator,
};
pub use report::{FailureStage, Section, SecurityReport};
pub use sentiment::{
    NewsSnippet, SentimentAnalysis, SentimentLabel, SentimentOutcome, SentimentSummary,
    SnippetVerdict,
};
