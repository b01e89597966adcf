//! Environment-driven configuration.

use std::env;
use std::str::FromStr;

/// Deployment environment, used to pick the log formatter.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Indicator periods and classification thresholds.
///
/// `distance_threshold_percent` is caller-mutable at runtime; it is passed
/// into every classification rather than baked into engine state, so cached
/// snapshots can be re-classified without refetching candles.
#[derive(Debug, Clone)]
pub struct Thresholds {
    pub distance_threshold_percent: f64,
    pub bbw_threshold_percent: f64,
    pub ema_short_period: usize,
    pub ema_long_period: usize,
    pub bbw_period: usize,
    pub adx_period: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            distance_threshold_percent: 1.65,
            bbw_threshold_percent: 1.0,
            ema_short_period: 59,
            ema_long_period: 200,
            bbw_period: 20,
            adx_period: 14,
        }
    }
}

impl Thresholds {
    /// Minimum candle count an instrument needs before any indicator is
    /// attempted.
    pub fn min_samples(&self) -> usize {
        self.ema_long_period
            .max(self.bbw_period)
            .max(self.adx_period * 2)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: Thresholds,
    /// Candle interval requested from the candle source.
    pub kline_interval: String,
    /// Candles requested per symbol: long EMA plus ADX lookback plus buffer.
    pub kline_limit: usize,
    pub refresh_interval_seconds: u64,
    /// Universe filter: minimum absolute 24h change percentage.
    pub min_change_percent: f64,
    /// Bound on concurrent per-instrument fetches/evaluations.
    pub concurrency: usize,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        let kline_limit = thresholds.ema_long_period + thresholds.adx_period + 50;
        Self {
            thresholds,
            kline_interval: "1m".to_string(),
            kline_limit,
            refresh_interval_seconds: 60,
            min_change_percent: 5.0,
            concurrency: 8,
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let thresholds = Thresholds {
            distance_threshold_percent: env_parse("DISTANCE_THRESHOLD_PERCENT", 1.65),
            bbw_threshold_percent: env_parse("BBW_THRESHOLD_PERCENT", 1.0),
            ema_short_period: env_parse("EMA_SHORT_PERIOD", 59),
            ema_long_period: env_parse("EMA_LONG_PERIOD", 200),
            bbw_period: env_parse("BBW_PERIOD", 20),
            adx_period: env_parse("ADX_PERIOD", 14),
        };
        let kline_limit = thresholds.ema_long_period + thresholds.adx_period + 50;

        Self {
            thresholds,
            kline_interval: env::var("KLINE_INTERVAL").unwrap_or_else(|_| "1m".to_string()),
            kline_limit,
            refresh_interval_seconds: env_parse("REFRESH_INTERVAL_SECONDS", 60),
            min_change_percent: env_parse("MIN_CHANGE_PERCENT", 5.0),
            concurrency: env_parse("SCREENER_CONCURRENCY", 8),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
