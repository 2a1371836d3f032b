use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::indicators::IndicatorError;
use crate::signals::{RsiZone, TrendSignal};

/// A single daily observation. The trading-day index is the position in the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date: Some(date),
            close,
        }
    }

    pub fn undated(close: f64) -> Self {
        Self { date: None, close }
    }

    /// Bare close from JSON at position `index`; the day is implied by position.
    pub fn decode_close(index: usize, value: &Value) -> Result<Self, IndicatorError> {
        value.as_f64().map(Self::undated).ok_or_else(|| {
            IndicatorError::InvalidInput(format!("close at index {} is not a number", index))
        })
    }

    /// Observation from JSON at position `index`: a bare close or `{date, close}`.
    pub fn decode(index: usize, value: &Value) -> Result<Self, IndicatorError> {
        if value.is_number() {
            return Self::decode_close(index, value);
        }
        Self::deserialize(value).map_err(|e| {
            IndicatorError::InvalidInput(format!("observation at index {}: {}", index, e))
        })
    }
}

/// Chronological, non-empty series of closing prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from bare closes; days are implied by position.
    pub fn from_closes(closes: impl IntoIterator<Item = f64>) -> Result<Self, IndicatorError> {
        Self::from_points(closes.into_iter().map(PricePoint::undated).collect())
    }

    /// Build a series from observations, validating prices and day ordering.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, IndicatorError> {
        if points.is_empty() {
            return Err(IndicatorError::InsufficientData);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(IndicatorError::InvalidInput(format!(
                    "close at index {} is not a number",
                    index
                )));
            }
            if point.close <= 0.0 {
                return Err(IndicatorError::InvalidInput(format!(
                    "close at index {} must be positive, got {}",
                    index, point.close
                )));
            }
        }

        let dated = points.iter().filter(|p| p.date.is_some()).count();
        if dated != 0 && dated != points.len() {
            return Err(IndicatorError::InvalidInput(
                "either every observation carries a date or none does".to_string(),
            ));
        }

        for (index, pair) in points.windows(2).enumerate() {
            if let (Some(prev), Some(next)) = (pair[0].date, pair[1].date) {
                if next <= prev {
                    return Err(IndicatorError::InvalidInput(format!(
                        "observation {} ({}) is not after {}",
                        index + 1,
                        next,
                        prev
                    )));
                }
            }
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    /// `None` when the average loss over the window is zero.
    pub value: Option<f64>,
    pub period: usize,
}

/// Current-day indicator readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub macd: f64,
    pub signal_line: f64,
    pub rsi: Option<f64>,
}

/// Indicator readings together with their display tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    #[serde(flatten)]
    pub result: IndicatorResult,
    pub histogram: f64,
    pub trend: TrendSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_zone: Option<RsiZone>,
    pub observations: usize,
}
