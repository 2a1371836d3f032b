//! Unit tests for configuration defaults and validation

use stockpiler::config::{is_production, AppConfig, IndicatorConfig, DEFAULT_NEWS_LIMIT};
use stockpiler::indicators::IndicatorError;
use stockpiler::services::Lookback;

#[test]
fn test_indicator_defaults() {
    let config = IndicatorConfig::default();
    assert_eq!(config.fast_span, 12);
    assert_eq!(config.slow_span, 26);
    assert_eq!(config.signal_span, 9);
    assert_eq!(config.rsi_window, 14);
    assert_eq!(config.rsi_overbought, 70.0);
    assert_eq!(config.rsi_oversold, 30.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_window = IndicatorConfig {
        rsi_window: 0,
        ..IndicatorConfig::default()
    };
    assert!(matches!(
        zero_window.validate(),
        Err(IndicatorError::InvalidConfig(_))
    ));

    let equal_thresholds = IndicatorConfig {
        rsi_overbought: 50.0,
        rsi_oversold: 50.0,
        ..IndicatorConfig::default()
    };
    assert!(equal_thresholds.validate().is_err());

    let nan_threshold = IndicatorConfig {
        rsi_overbought: f64::NAN,
        ..IndicatorConfig::default()
    };
    assert!(nan_threshold.validate().is_err());
}

#[test]
fn test_partial_config_fills_defaults() {
    let config: IndicatorConfig = serde_json::from_str(r#"{ "rsi_window": 7 }"#).unwrap();
    assert_eq!(config.rsi_window, 7);
    assert_eq!(config.slow_span, 26);
}

#[test]
fn test_app_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.port, 8080);
    assert_eq!(config.news_limit, DEFAULT_NEWS_LIMIT);
    assert_eq!(config.lookback, Lookback::Months(6));
    assert!(!config.is_production());
}

#[test]
fn test_production_environments() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("staging"));
}
