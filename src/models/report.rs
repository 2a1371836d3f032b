use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorReport;
use crate::models::sentiment::SentimentAnalysis;

/// Outcome of one half of a security's analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Ready { result: T },
    Failed { stage: FailureStage, error: String },
}

impl<T> Section<T> {
    pub fn result(&self) -> Option<&T> {
        match self {
            Section::Ready { result } => Some(result),
            Section::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Failed { error, .. } => Some(error),
            Section::Ready { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready { .. })
    }
}

/// Where a section failed: fetching its data or computing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Provider,
    Analysis,
}

/// Indicator and sentiment results for one identifier, reported independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub symbol: String,
    pub indicators: Section<IndicatorReport>,
    pub sentiment: Section<SentimentAnalysis>,
}
