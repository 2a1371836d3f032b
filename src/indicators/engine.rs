//! Indicator engine: price series in, current-day MACD/signal/RSI out.

use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::IndicatorError;
use crate::models::indicators::{IndicatorReport, IndicatorResult, PriceSeries};
use crate::signals::{RsiZone, TrendSignal};

/// Stateless evaluator parameterized by spans, window and thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    pub fn new(config: IndicatorConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Raw readings for a validated series.
    pub fn compute(&self, series: &PriceSeries) -> Result<IndicatorResult, IndicatorError> {
        let closes = series.closes();
        let macd = calculate_macd(
            &closes,
            self.config.fast_span,
            self.config.slow_span,
            self.config.signal_span,
        )
        .ok_or(IndicatorError::InsufficientData)?;
        let rsi = calculate_rsi(&closes, self.config.rsi_window);

        Ok(IndicatorResult {
            macd: macd.macd,
            signal_line: macd.signal,
            rsi: rsi.value,
        })
    }

    /// Readings plus trend and RSI-zone tags.
    pub fn evaluate(&self, series: &PriceSeries) -> Result<IndicatorReport, IndicatorError> {
        let result = self.compute(series)?;
        let trend = TrendSignal::from_macd(result.macd, result.signal_line);
        let rsi_zone = RsiZone::classify(result.rsi, &self.config);

        debug!(
            observations = series.len(),
            macd = result.macd,
            signal_line = result.signal_line,
            rsi = ?result.rsi,
            trend = ?trend,
            "indicator evaluation complete"
        );

        Ok(IndicatorReport {
            result,
            histogram: result.macd - result.signal_line,
            trend,
            rsi_zone,
            observations: series.len(),
        })
    }

    /// Validate bare closes and evaluate them.
    pub fn evaluate_closes(&self, closes: &[f64]) -> Result<IndicatorReport, IndicatorError> {
        let series = PriceSeries::from_closes(closes.iter().copied())?;
        self.evaluate(&series)
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            config: IndicatorConfig::default(),
        }
    }
}
