//! Per-instrument evaluation: validate the series, compute the snapshot,
//! classify it, assemble the record.

use chrono::Utc;

use crate::config::Thresholds;
use crate::indicators;
use crate::models::{AnalysisRecord, Candle, SkipReason};
use crate::signals::classifier::{classify, Classification};

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Evaluate one instrument's candle series.
    ///
    /// Non-finite samples are discarded per array before validation; the
    /// surviving arrays must be equal length and at least
    /// [`Thresholds::min_samples`] long. Violations produce a typed skip,
    /// never a panic or a batch error.
    pub fn evaluate(
        symbol: &str,
        candles: &[Candle],
        thresholds: &Thresholds,
    ) -> Result<AnalysisRecord, SkipReason> {
        let highs: Vec<f64> = candles.iter().map(|c| c.high).filter(|v| v.is_finite()).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).filter(|v| v.is_finite()).collect();
        let closes: Vec<f64> = candles
            .iter()
            .map(|c| c.close)
            .filter(|v| v.is_finite())
            .collect();

        let need = thresholds.min_samples();
        if closes.len() < need {
            return Err(SkipReason::InsufficientSamples {
                have: closes.len(),
                need,
            });
        }
        if highs.len() != closes.len() || lows.len() != closes.len() {
            return Err(SkipReason::MismatchedArrays {
                highs: highs.len(),
                lows: lows.len(),
                closes: closes.len(),
            });
        }

        let snapshot = indicators::compute_snapshot(&highs, &lows, &closes, thresholds);
        let ema_distance_percent = snapshot.ema_distance_percent();
        let Classification {
            directional_bias,
            alert_signal,
        } = classify(&snapshot, ema_distance_percent, thresholds);

        Ok(AnalysisRecord {
            symbol: symbol.to_string(),
            indicators: snapshot,
            ema_distance_percent,
            directional_bias,
            alert_signal,
            timestamp: Utc::now(),
        })
    }
}
