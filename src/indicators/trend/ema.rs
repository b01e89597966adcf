//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the final EMA over a close series.
///
/// Returns `None` when fewer than `period` closes are available. The value
/// is seeded from the simple moving average of the first `period` closes and
/// then smoothed over the rest of the series in a single pass; seeding from
/// the first value alone would converge differently and is deliberately not
/// done here.
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<f64> {
    math::ema(closes, period)
}
