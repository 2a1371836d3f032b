//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;

/// Full MACD line: fast EMA minus slow EMA at every index.
pub fn macd_line(closes: &[f64], fast_span: usize, slow_span: usize) -> Vec<f64> {
    let fast = math::ema_series(closes, fast_span);
    let slow = math::ema_series(closes, slow_span);
    fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect()
}

/// Calculate the current MACD reading
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD line
/// Histogram = MACD - Signal
///
/// Every EMA is seeded with its first sample, so series shorter than the slow
/// span still produce a value. Returns `None` only for an empty input.
pub fn calculate_macd(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> Option<MacdIndicator> {
    let line = macd_line(closes, fast_span, slow_span);
    let macd = *line.last()?;
    let signal = math::ema(&line, signal_span)?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}

