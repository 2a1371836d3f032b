//! Environment-driven configuration.
//!
//! Every value has a default; `.env` files are honored by the binaries through
//! `dotenvy` before these readers run.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::services::market_data::Lookback;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_NEWS_LIMIT: usize = 10;
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {key} has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    Indicators(#[from] IndicatorError),
}

/// Spans, window and thresholds for the indicator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub fast_span: usize,
    pub slow_span: usize,
    pub signal_span: usize,
    pub rsi_window: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
            rsi_window: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        if self.fast_span == 0 || self.slow_span == 0 || self.signal_span == 0 {
            return Err(IndicatorError::InvalidConfig(
                "EMA spans must be at least 1".to_string(),
            ));
        }
        if self.rsi_window == 0 {
            return Err(IndicatorError::InvalidConfig(
                "RSI window must be at least 1".to_string(),
            ));
        }
        if !self.rsi_oversold.is_finite() || !self.rsi_overbought.is_finite() {
            return Err(IndicatorError::InvalidConfig(
                "RSI thresholds must be finite".to_string(),
            ));
        }
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(IndicatorError::InvalidConfig(format!(
                "oversold threshold {} must be below overbought threshold {}",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        Ok(())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            fast_span: env_parse("MACD_FAST_SPAN", defaults.fast_span)?,
            slow_span: env_parse("MACD_SLOW_SPAN", defaults.slow_span)?,
            signal_span: env_parse("MACD_SIGNAL_SPAN", defaults.signal_span)?,
            rsi_window: env_parse("RSI_WINDOW", defaults.rsi_window)?,
            rsi_overbought: env_parse("RSI_OVERBOUGHT", defaults.rsi_overbought)?,
            rsi_oversold: env_parse("RSI_OVERSOLD", defaults.rsi_oversold)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings shared by the CLI and the API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub lookback: Lookback,
    pub news_limit: usize,
    pub indicators: IndicatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            lookback: Lookback::default(),
            news_limit: DEFAULT_NEWS_LIMIT,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: get_environment(),
            port: env_parse("PORT", DEFAULT_PORT)?,
            data_dir: env::var("STOCKPILER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            lookback: env_parse("STOCKPILER_LOOKBACK", Lookback::default())?,
            news_limit: env_parse("STOCKPILER_NEWS_LIMIT", DEFAULT_NEWS_LIMIT)?,
            indicators: IndicatorConfig::from_env()?,
        })
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

/// Deployment environment from `APP_ENV`, defaulting to `development`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value: raw })
        }
        _ => Ok(default),
    }
}
