//! Threshold rules turning indicator values into directional signals.

use crate::config::Thresholds;
use crate::models::{IndicatorSnapshot, SignalDirection};

/// Both classifications for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// From the +DI/-DI comparison.
    pub directional_bias: SignalDirection,
    /// From the EMA-distance/BBW squeeze rule; the trigger for outbound
    /// notification.
    pub alert_signal: SignalDirection,
}

/// Classify one instrument's indicator snapshot.
///
/// The directional bias is `Long`/`Short` from whichever DI dominates,
/// `Neutral` when either is absent or they are equal.
///
/// The alert rule fires only inside a volatility squeeze: `bbw_percent`
/// present and at or below its threshold, with a defined EMA distance.
/// A distance threshold of 0 is a valid degenerate configuration where any
/// distance triggers.
pub fn classify(
    snapshot: &IndicatorSnapshot,
    ema_distance_percent: Option<f64>,
    thresholds: &Thresholds,
) -> Classification {
    let directional_bias = match (snapshot.plus_di, snapshot.minus_di) {
        (Some(plus), Some(minus)) if plus > minus => SignalDirection::Long,
        (Some(plus), Some(minus)) if minus > plus => SignalDirection::Short,
        _ => SignalDirection::Neutral,
    };

    let alert_signal = match (snapshot.bbw_percent, ema_distance_percent) {
        (Some(bbw), Some(distance)) if bbw <= thresholds.bbw_threshold_percent => {
            if distance >= thresholds.distance_threshold_percent {
                SignalDirection::Long
            } else if distance <= -thresholds.distance_threshold_percent {
                SignalDirection::Short
            } else {
                SignalDirection::Neutral
            }
        }
        _ => SignalDirection::Neutral,
    };

    Classification {
        directional_bias,
        alert_signal,
    }
}
