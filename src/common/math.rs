//! Shared numeric primitives for the indicator modules.

/// Exponential moving average over the full slice, returning the final value.
///
/// Seeded with the arithmetic mean of the first `period` values, then updated
/// with `k = 2 / (period + 1)` over the remainder. Returns `None` when the
/// slice is shorter than `period`.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = values[..period].iter().sum::<f64>() / period as f64;
    for &value in &values[period..] {
        ema = value * k + ema * (1.0 - k);
    }
    Some(ema)
}

/// Same recurrence as [`ema`], keeping every intermediate value.
///
/// The ADX pipeline consumes whole smoothed series, not just endpoints.
/// Returns an empty vec when the slice is shorter than `period`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut current = values[..period].iter().sum::<f64>() / period as f64;
    let mut smoothed = Vec::with_capacity(values.len() - period + 1);
    smoothed.push(current);
    for &value in &values[period..] {
        current = value * k + current * (1.0 - k);
        smoothed.push(current);
    }
    smoothed
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

/// True range of one bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}
