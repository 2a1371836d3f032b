//! Moving-average and differencing primitives used by the indicator modules.

/// Smoothing factor for an exponential moving average of the given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Recursive EMA over every sample, seeded with the first value.
///
/// `ema[0] = x[0]`, `ema[i] = ema[i-1] + alpha * (x[i] - ema[i-1])`.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = ema_alpha(span);
    let mut series = Vec::with_capacity(values.len());

    let mut iter = values.iter().copied();
    let Some(mut previous) = iter.next() else {
        return series;
    };
    series.push(previous);

    for value in iter {
        previous += alpha * (value - previous);
        series.push(previous);
    }

    series
}

/// Last value of [`ema_series`].
pub fn ema(values: &[f64], span: usize) -> Option<f64> {
    ema_series(values, span).last().copied()
}

/// Day-over-day differences. The result is one element shorter than the input.
pub fn diff(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Trailing mean over at most `window` samples.
///
/// Positions with fewer than `min_periods` samples available are `None`;
/// otherwise the mean uses however many samples fit in the window.
pub fn rolling_mean(values: &[f64], window: usize, min_periods: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let min_periods = min_periods.max(1);

    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            if slice.len() < min_periods {
                return None;
            }
            // Summing each window directly keeps an all-zero window exactly zero.
            Some(slice.iter().sum::<f64>() / slice.len() as f64)
        })
        .collect()
}
