use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Universe entry supplied by the instrument source: a tradable symbol with
/// its current price and 24h change percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub last_price: f64,
    pub price_change_percent: f64,
}

/// Directional classification. `Neutral` covers both "no signal" and
/// "inputs unavailable"; absent indicators never classify as a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Long,
    Short,
    Neutral,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalDirection::Long => write!(f, "LONG"),
            SignalDirection::Short => write!(f, "SHORT"),
            SignalDirection::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Per-instrument indicator outputs. Every field is optional: a series too
/// short for a computation yields `None`, which must propagate downstream
/// rather than collapse to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbw_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_di: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minus_di: Option<f64>,
}

impl IndicatorSnapshot {
    /// Distance of the short EMA from the long EMA, in percent of the long.
    /// Defined only when both EMAs are present and the long EMA is nonzero.
    pub fn ema_distance_percent(&self) -> Option<f64> {
        match (self.ema_short, self.ema_long) {
            (Some(short), Some(long)) if long != 0.0 => Some((short - long) / long * 100.0),
            _ => None,
        }
    }
}

/// One instrument's full evaluation for a cycle. Built fresh each cycle and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub symbol: String,
    pub indicators: IndicatorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_distance_percent: Option<f64>,
    pub directional_bias: SignalDirection,
    pub alert_signal: SignalDirection,
    pub timestamp: DateTime<Utc>,
}

/// Why an instrument was excluded from a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    InsufficientSamples { have: usize, need: usize },
    MismatchedArrays { highs: usize, lows: usize, closes: usize },
    FetchFailed(String),
    TaskFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientSamples { have, need } => {
                write!(f, "insufficient samples: {} < {}", have, need)
            }
            SkipReason::MismatchedArrays {
                highs,
                lows,
                closes,
            } => write!(
                f,
                "mismatched arrays after filtering: highs={} lows={} closes={}",
                highs, lows, closes
            ),
            SkipReason::FetchFailed(err) => write!(f, "candle fetch failed: {}", err),
            SkipReason::TaskFailed(err) => write!(f, "evaluation task failed: {}", err),
        }
    }
}

/// A skipped instrument with its reason. Skips are surfaced alongside the
/// successful records so callers (and tests) can assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skip {
    pub symbol: String,
    pub reason: SkipReason,
}
