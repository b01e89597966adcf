//! ADX (Average Directional Index) with +DI/-DI components
//!
//! Smoothing of TR, +DM, -DM and DX all reuse the SMA-seeded exponential
//! recurrence from [`crate::common::math`] rather than Wilder's running-sum
//! smoothing. The numbers differ from textbook ADX; that recurrence is the
//! documented behavior and must not be "corrected".

use crate::common::math;

/// ADX output. The three values are absent together when the series is too
/// short, with one exception: when fewer than `period` DX values exist the
/// last +DI/-DI are still reported while ADX stays absent. Callers must
/// handle ADX-absent with DI-present.
#[derive(Debug, Clone, Default)]
pub struct AdxOutput {
    pub adx: Option<f64>,
    pub plus_di: Option<f64>,
    pub minus_di: Option<f64>,
}

/// Calculate ADX, +DI and -DI over aligned high/low/close series.
///
/// Requires at least `2 * period` samples; anything less yields an
/// all-absent output.
pub fn calculate_adx(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> AdxOutput {
    if period == 0 || highs.len() < period * 2 {
        return AdxOutput::default();
    }

    let mut tr_values = Vec::with_capacity(highs.len() - 1);
    let mut plus_dm_values = Vec::with_capacity(highs.len() - 1);
    let mut minus_dm_values = Vec::with_capacity(highs.len() - 1);

    for i in 1..highs.len() {
        tr_values.push(math::true_range(highs[i], lows[i], closes[i - 1]));

        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];

        plus_dm_values.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    if tr_values.len() < period
        || plus_dm_values.len() < period
        || minus_dm_values.len() < period
    {
        return AdxOutput::default();
    }

    let smoothed_tr = math::ema_series(&tr_values, period);
    let smoothed_plus_dm = math::ema_series(&plus_dm_values, period);
    let smoothed_minus_dm = math::ema_series(&minus_dm_values, period);

    if smoothed_tr.is_empty() || smoothed_plus_dm.is_empty() || smoothed_minus_dm.is_empty() {
        return AdxOutput::default();
    }

    let mut plus_di_values = Vec::with_capacity(smoothed_tr.len());
    let mut minus_di_values = Vec::with_capacity(smoothed_tr.len());
    let mut dx_values = Vec::with_capacity(smoothed_tr.len());

    for i in 0..smoothed_tr.len() {
        let atr = smoothed_tr[i];
        if atr == 0.0 {
            // Flat market: no range means no directional movement either.
            plus_di_values.push(0.0);
            minus_di_values.push(0.0);
            dx_values.push(0.0);
            continue;
        }
        let plus_di = 100.0 * (smoothed_plus_dm[i] / atr);
        let minus_di = 100.0 * (smoothed_minus_dm[i] / atr);
        plus_di_values.push(plus_di);
        minus_di_values.push(minus_di);

        let di_sum = plus_di + minus_di;
        let dx = if di_sum == 0.0 {
            0.0
        } else {
            100.0 * ((plus_di - minus_di).abs() / di_sum)
        };
        dx_values.push(dx);
    }

    if dx_values.len() < period {
        // Partial result: not enough DX history to smooth an ADX, but the
        // directional components are still meaningful.
        return AdxOutput {
            adx: None,
            plus_di: plus_di_values.last().copied(),
            minus_di: minus_di_values.last().copied(),
        };
    }

    AdxOutput {
        adx: math::ema(&dx_values, period),
        plus_di: plus_di_values.last().copied(),
        minus_di: minus_di_values.last().copied(),
    }
}
