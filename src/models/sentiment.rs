use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sentiment::SentimentError;

/// One news text. Absent and empty texts are never scored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsSnippet {
    text: Option<String>,
}

impl NewsSnippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn absent() -> Self {
        Self { text: None }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the snippet takes part in aggregation.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Interpret an arbitrary JSON value: strings are texts, `null` is absent
    /// text, anything else cannot be scored.
    pub fn from_json_value(value: &Value) -> Result<Self, SentimentError> {
        match value {
            Value::String(text) => Ok(Self::new(text.clone())),
            Value::Null => Ok(Self::absent()),
            other => Err(SentimentError::InvalidInput(format!(
                "expected text, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Sign of the polarity score.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Label tallies and the plurality label for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub overall: SentimentLabel,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count + self.neutral_count
    }
}

/// Aggregate result; `NoData` is reported when nothing was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentimentOutcome {
    NoData,
    Summary(SentimentSummary),
}

impl SentimentOutcome {
    pub fn summary(&self) -> Option<&SentimentSummary> {
        match self {
            SentimentOutcome::Summary(summary) => Some(summary),
            SentimentOutcome::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, SentimentOutcome::NoData)
    }
}

/// What happened to a single snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SnippetVerdict {
    Excluded,
    Scored { polarity: f64, label: SentimentLabel },
    Rejected { reason: String },
}

impl SnippetVerdict {
    pub fn label(&self) -> Option<SentimentLabel> {
        match self {
            SnippetVerdict::Scored { label, .. } => Some(*label),
            _ => None,
        }
    }
}

/// Per-snippet verdicts (input order) and the batch outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub verdicts: Vec<SnippetVerdict>,
    pub outcome: SentimentOutcome,
}
