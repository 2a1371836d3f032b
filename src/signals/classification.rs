//! Qualitative tags derived from indicator readings.

use serde::{Deserialize, Serialize};

use crate::config::IndicatorConfig;

/// MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
    Neutral,
}

impl TrendSignal {
    pub fn from_macd(macd: f64, signal_line: f64) -> Self {
        if macd < signal_line {
            TrendSignal::Bearish
        } else if macd > signal_line {
            TrendSignal::Bullish
        } else {
            TrendSignal::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendSignal::Bullish => "Bullish",
            TrendSignal::Bearish => "Bearish",
            TrendSignal::Neutral => "Neutral",
        }
    }
}

/// RSI position relative to the overbought/oversold thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn from_rsi(rsi: f64, oversold: f64, overbought: f64) -> Self {
        if rsi < oversold {
            RsiZone::Oversold
        } else if rsi > overbought {
            RsiZone::Overbought
        } else {
            RsiZone::Neutral
        }
    }

    /// Zone for an RSI that may be undefined; no zone is reported without a value.
    pub fn classify(rsi: Option<f64>, config: &IndicatorConfig) -> Option<Self> {
        rsi.map(|value| Self::from_rsi(value, config.rsi_oversold, config.rsi_overbought))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsiZone::Overbought => "Overbought",
            RsiZone::Oversold => "Oversold",
            RsiZone::Neutral => "Neutral",
        }
    }
}
