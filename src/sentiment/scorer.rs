use crate::sentiment::SentimentError;

/// Replaceable polarity model: preprocessed text to a score in `[-1, 1]`.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Reject scores a model should never produce.
pub fn validate_polarity(score: f64) -> Result<f64, SentimentError> {
    if !score.is_finite() {
        return Err(SentimentError::InvalidInput(format!(
            "polarity {} is not a finite number",
            score
        )));
    }
    if !(-1.0..=1.0).contains(&score) {
        return Err(SentimentError::InvalidInput(format!(
            "polarity {} is outside [-1, 1]",
            score
        )));
    }
    Ok(score)
}
