//! Unit tests for MACD indicator

use stockpiler::indicators::momentum::{calculate_macd, macd_line};
use stockpiler::models::MacdIndicator;

fn macd_12_26_9(closes: &[f64]) -> Option<MacdIndicator> {
    calculate_macd(closes, 12, 26, 9)
}

#[test]
fn test_macd_constant_series_is_zero() {
    let closes = vec![75.25; 40];
    let line = macd_line(&closes, 12, 26);
    assert!(line.iter().all(|&v| v == 0.0));

    let macd = macd_12_26_9(&closes).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_empty_series() {
    assert!(macd_12_26_9(&[]).is_none());
}

#[test]
fn test_macd_single_observation() {
    let macd = macd_12_26_9(&[123.0]).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
}

#[test]
fn test_macd_short_series_degrades_gracefully() {
    let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
    let macd = macd_12_26_9(&closes).unwrap();
    assert!(macd.macd.is_finite());
    assert!(macd.macd > 0.0);
}

#[test]
fn test_macd_matches_manual_recursion() {
    let closes = [10.0, 12.0, 14.0];
    let macd = calculate_macd(&closes, 1, 3, 2).unwrap();

    // span 1 tracks the price; span 3 has alpha 0.5
    let slow = [10.0, 11.0, 12.5];
    let line = [0.0, 12.0 - slow[1], 14.0 - slow[2]];
    let alpha = 2.0 / 3.0;
    let mut signal = line[0];
    for value in &line[1..] {
        signal += alpha * (value - signal);
    }

    assert!((macd.macd - line[2]).abs() < 1e-12);
    assert!((macd.signal - signal).abs() < 1e-12);
    assert!((macd.histogram - (line[2] - signal)).abs() < 1e-12);
}

#[test]
fn test_macd_uptrend_is_above_signal() {
    let closes: Vec<f64> = (0..120).map(|i| 50.0 + i as f64 * 0.5).collect();
    let macd = macd_12_26_9(&closes).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.signal);
    assert!(macd.histogram > 0.0);
}
