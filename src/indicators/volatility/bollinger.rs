//! Percentage Bollinger bandwidth
//!
//! Width of the ±2σ band around the simple moving average of the most
//! recent `period` closes, normalized by that average.

use crate::common::math;

/// Calculate the percentage Bollinger bandwidth.
///
/// Returns `None` when fewer than `period` closes are available, or when the
/// window mean is zero (the normalization would divide by it). Variance is
/// population variance: divide by `period`, not `period - 1`.
pub fn bandwidth_percent(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let window = &closes[closes.len() - period..];
    let mean = math::mean(window)?;
    if mean == 0.0 {
        return None;
    }

    let std_dev = math::population_std_dev(window)?;
    let upper = mean + 2.0 * std_dev;
    let lower = mean - 2.0 * std_dev;

    Some((upper - lower) / mean * 100.0)
}
