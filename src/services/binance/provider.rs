//! Binance REST implementations of the market data seams.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, warn};

use crate::models::{Candle, Ticker};
use crate::services::market_data::{BoxError, CandleSource, InstrumentSource};

use super::messages::{parse_kline, KlineRow, TickerStats};

const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// REST client for the Binance spot API, covering both the instrument
/// universe and the candle source.
pub struct BinanceMarketData {
    client: reqwest::Client,
    base_url: String,
    min_change_percent: f64,
}

impl BinanceMarketData {
    pub fn new(min_change_percent: f64) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, reqwest::Client::new(), min_change_percent)
    }

    /// Custom base URL and client, used by tests to point at a mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        client: reqwest::Client,
        min_change_percent: f64,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            min_change_percent,
        }
    }

    fn retry_policy() -> ExponentialBuilder {
        ExponentialBuilder::default().with_max_times(3)
    }

    /// Retry transient failures only: connection errors, 5xx, and the
    /// 429/418 rate-limit responses Binance hands out under pressure.
    fn is_transient(err: &reqwest::Error) -> bool {
        match err.status() {
            Some(status) => {
                status.is_server_error() || status.as_u16() == 429 || status.as_u16() == 418
            }
            None => true,
        }
    }
}

#[async_trait]
impl InstrumentSource for BinanceMarketData {
    async fn get_universe(&self) -> Result<Vec<Ticker>, BoxError> {
        let url = format!("{}/api/v3/ticker/24hr", self.base_url);
        let fetch = || async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<TickerStats>>()
                .await
        };

        let stats = fetch
            .retry(Self::retry_policy())
            .when(Self::is_transient)
            .notify(|err, dur| {
                warn!(error = %err, "ticker fetch failed, retrying in {:?}", dur);
            })
            .await?;

        let universe: Vec<Ticker> = stats
            .into_iter()
            .filter_map(|stats| {
                let last_price: f64 = stats.last_price.parse().ok()?;
                let change: f64 = stats.price_change_percent.parse().ok()?;
                let eligible = stats.symbol.ends_with("USDT")
                    && last_price > 0.0
                    && change.abs() > self.min_change_percent;
                eligible.then(|| Ticker {
                    symbol: stats.symbol,
                    last_price,
                    price_change_percent: change,
                })
            })
            .collect();

        debug!(
            count = universe.len(),
            "found {} high-volatility USDT tickers",
            universe.len()
        );
        Ok(universe)
    }
}

#[async_trait]
impl CandleSource for BinanceMarketData {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, BoxError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let rows: Vec<KlineRow> = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Unparsable rows are dropped; the pipeline's sample-count check
        // decides whether what remains is enough.
        Ok(rows.iter().filter_map(parse_kline).collect())
    }
}
