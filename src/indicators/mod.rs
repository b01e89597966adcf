//! Indicator engine: pure functions over numeric OHLC arrays.
//!
//! No I/O, no shared state. Series too short for a computation yield `None`,
//! and absence propagates untouched into the snapshot.

pub mod trend;
pub mod volatility;

use crate::config::Thresholds;
use crate::models::IndicatorSnapshot;
use trend::AdxOutput;

/// Compute the full indicator snapshot for one instrument.
///
/// The three input slices must be index-aligned per timestamp; the caller
/// (the analysis engine) enforces equal lengths before getting here.
pub fn compute_snapshot(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    thresholds: &Thresholds,
) -> IndicatorSnapshot {
    let AdxOutput {
        adx,
        plus_di,
        minus_di,
    } = trend::calculate_adx(highs, lows, closes, thresholds.adx_period);

    IndicatorSnapshot {
        ema_short: trend::calculate_ema(closes, thresholds.ema_short_period),
        ema_long: trend::calculate_ema(closes, thresholds.ema_long_period),
        bbw_percent: volatility::bandwidth_percent(closes, thresholds.bbw_period),
        adx,
        plus_di,
        minus_di,
    }
}
