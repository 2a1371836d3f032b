//! Batch sentiment aggregation with strict-plurality voting.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::sentiment::{
    NewsSnippet, SentimentAnalysis, SentimentLabel, SentimentOutcome, SentimentSummary,
    SnippetVerdict,
};
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::preprocess::preprocess_text;
use crate::sentiment::scorer::{validate_polarity, PolarityScorer};
use crate::sentiment::SentimentError;

/// Overall label for a tally.
///
/// A label wins only with a count strictly greater than both others; any tie
/// for the maximum (two-way or three-way) is Neutral.
pub fn plurality(positive: usize, negative: usize, neutral: usize) -> SentimentLabel {
    if positive > negative && positive > neutral {
        SentimentLabel::Positive
    } else if negative > positive && negative > neutral {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Tally scored verdicts. `NoData` when none were scored.
pub fn summarize(verdicts: &[SnippetVerdict]) -> SentimentOutcome {
    let (mut positive, mut negative, mut neutral) = (0, 0, 0);
    for label in verdicts.iter().filter_map(SnippetVerdict::label) {
        match label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
    }

    if positive + negative + neutral == 0 {
        return SentimentOutcome::NoData;
    }

    SentimentOutcome::Summary(SentimentSummary {
        positive_count: positive,
        negative_count: negative,
        neutral_count: neutral,
        overall: plurality(positive, negative, neutral),
    })
}

/// Scores snippets with a pluggable model and aggregates the labels.
#[derive(Clone)]
pub struct SentimentAggregator {
    scorer: Arc<dyn PolarityScorer + Send + Sync>,
}

impl Default for SentimentAggregator {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

impl SentimentAggregator {
    pub fn new(scorer: Arc<dyn PolarityScorer + Send + Sync>) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Verdict for one snippet: excluded without text, rejected when the
    /// model cannot score it.
    pub fn score_snippet(&self, snippet: &NewsSnippet) -> SnippetVerdict {
        let text = match snippet.text() {
            Some(text) if snippet.has_text() => text,
            _ => return SnippetVerdict::Excluded,
        };

        let cleaned = preprocess_text(text);
        match self.scorer.polarity(&cleaned).and_then(validate_polarity) {
            Ok(polarity) => SnippetVerdict::Scored {
                polarity,
                label: SentimentLabel::from_polarity(polarity),
            },
            Err(e) => {
                warn!(error = %e, scorer = self.scorer.name(), "snippet rejected");
                SnippetVerdict::Rejected {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn analyze(&self, snippets: &[NewsSnippet]) -> SentimentAnalysis {
        let verdicts: Vec<SnippetVerdict> =
            snippets.iter().map(|s| self.score_snippet(s)).collect();
        self.finish(verdicts)
    }

    /// Like [`analyze`](Self::analyze) for inputs that may have failed to
    /// decode; failed entries are rejected individually.
    pub fn analyze_entries<I>(&self, entries: I) -> SentimentAnalysis
    where
        I: IntoIterator<Item = Result<NewsSnippet, SentimentError>>,
    {
        let verdicts: Vec<SnippetVerdict> = entries
            .into_iter()
            .map(|entry| match entry {
                Ok(snippet) => self.score_snippet(&snippet),
                Err(e) => {
                    warn!(error = %e, "snippet rejected before scoring");
                    SnippetVerdict::Rejected {
                        reason: e.to_string(),
                    }
                }
            })
            .collect();
        self.finish(verdicts)
    }

    fn finish(&self, verdicts: Vec<SnippetVerdict>) -> SentimentAnalysis {
        let outcome = summarize(&verdicts);
        debug!(
            snippets = verdicts.len(),
            outcome = ?outcome,
            "sentiment aggregation complete"
        );
        SentimentAnalysis { verdicts, outcome }
    }
}
