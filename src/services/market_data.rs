//! Market data seams the core depends on.
//!
//! The engine and runtime only see these traits; concrete providers live in
//! sibling modules and are swapped for mocks in tests.

use async_trait::async_trait;

use crate::models::{Candle, Ticker};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies historical candles for one symbol. A short or empty response is
/// benign; the pipeline treats it as insufficient data, not an error.
#[async_trait]
pub trait CandleSource: Send + Sync {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, BoxError>;
}

/// Supplies the filtered instrument universe with current price and 24h
/// change. Filtering is this source's concern; the core does not re-filter.
#[async_trait]
pub trait InstrumentSource: Send + Sync {
    async fn get_universe(&self) -> Result<Vec<Ticker>, BoxError>;
}
