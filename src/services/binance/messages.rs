//! Binance REST payload types and parsing.

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Candle;

/// One entry of `GET /api/v3/ticker/24hr`. Binance encodes numerics as
/// strings in this payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
    pub symbol: String,
    pub price_change_percent: String,
    pub last_price: String,
}

/// One row of `GET /api/v3/klines`: a heterogeneous JSON array of
/// `[open_time, open, high, low, close, volume, ...]` with string-encoded
/// prices.
pub type KlineRow = Vec<Value>;

/// Parse one kline row into a candle. Rows with missing or unparsable
/// fields yield `None` and are dropped upstream.
pub fn parse_kline(row: &KlineRow) -> Option<Candle> {
    let open_time = row.first()?.as_i64()?;
    let timestamp = Utc.timestamp_millis_opt(open_time).single()?;

    Some(Candle::new(
        field_f64(row, 1)?,
        field_f64(row, 2)?,
        field_f64(row, 3)?,
        field_f64(row, 4)?,
        field_f64(row, 5)?,
        timestamp,
    ))
}

fn field_f64(row: &KlineRow, index: usize) -> Option<f64> {
    match row.get(index)? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
