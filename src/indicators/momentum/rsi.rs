//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiIndicator;

/// Calculate RSI at the last observation
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are trailing means over `period` deltas with a minimum of one
/// sample. The value is `None` when the average loss is zero, which covers a
/// series with no losses and a single-observation series.
pub fn calculate_rsi(closes: &[f64], period: usize) -> RsiIndicator {
    let deltas = math::diff(closes);
    let gains: Vec<f64> = deltas.iter().map(|d| d.max(0.0)).collect();
    let losses: Vec<f64> = deltas.iter().map(|d| (-d).max(0.0)).collect();

    let avg_gain = math::rolling_mean(&gains, period, 1).last().copied().flatten();
    let avg_loss = math::rolling_mean(&losses, period, 1).last().copied().flatten();

    let value = match (avg_gain, avg_loss) {
        (Some(gain), Some(loss)) if loss != 0.0 => {
            let rs = gain / loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        }
        _ => None,
    };

    RsiIndicator { value, period }
}

