//! Screener runtime: one evaluation cycle end to end.
//!
//! Owns the only state that survives between cycles, the symbol to
//! last-alerted-signal map used for alert de-duplication. Everything else is
//! recomputed from fresh candle input each cycle.

use futures_util::{stream, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::models::{AnalysisRecord, SignalDirection, Skip, SkipReason, Ticker};
use crate::services::market_data::{BoxError, CandleSource, InstrumentSource};
use crate::services::telegram::NotificationSink;
use crate::signals::classifier::{classify, Classification};
use crate::signals::pipeline::{evaluate_batch, BatchOutcome, Instrument};

pub struct ScreenerRuntime {
    config: Config,
    instruments: Arc<dyn InstrumentSource>,
    candles: Arc<dyn CandleSource>,
    notifier: Arc<dyn NotificationSink>,
    sent_alerts: HashMap<String, SignalDirection>,
    latest: Vec<AnalysisRecord>,
}

impl ScreenerRuntime {
    pub fn new(
        config: Config,
        instruments: Arc<dyn InstrumentSource>,
        candles: Arc<dyn CandleSource>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            config,
            instruments,
            candles,
            notifier,
            sent_alerts: HashMap::new(),
            latest: Vec::new(),
        }
    }

    /// Records from the most recent cycle (or re-classification).
    pub fn latest_records(&self) -> &[AnalysisRecord] {
        &self.latest
    }

    /// Change the EMA-distance alert threshold and re-classify the cached
    /// records without refetching candles; indicator values do not depend on
    /// the threshold. Non-finite or negative input clamps to 0, which is a
    /// valid degenerate configuration.
    pub fn set_distance_threshold(&mut self, value: f64) {
        let value = if value.is_finite() && value >= 0.0 {
            value
        } else {
            0.0
        };
        self.config.thresholds.distance_threshold_percent = value;

        self.latest = self
            .latest
            .iter()
            .map(|record| {
                let Classification {
                    directional_bias,
                    alert_signal,
                } = classify(
                    &record.indicators,
                    record.ema_distance_percent,
                    &self.config.thresholds,
                );
                AnalysisRecord {
                    symbol: record.symbol.clone(),
                    indicators: record.indicators.clone(),
                    ema_distance_percent: record.ema_distance_percent,
                    directional_bias,
                    alert_signal,
                    timestamp: record.timestamp,
                }
            })
            .collect();
    }

    /// Run one full cycle: universe fetch, candle fan-out, batch evaluation,
    /// alert dispatch. Per-instrument failures become skips; only a failed
    /// universe fetch fails the cycle.
    pub async fn run_cycle(&mut self) -> Result<BatchOutcome, BoxError> {
        let universe = self.instruments.get_universe().await?;
        if universe.is_empty() {
            info!("no high-volatility instruments in universe, clearing results");
            self.latest.clear();
            self.sent_alerts.clear();
            return Ok(BatchOutcome::default());
        }

        info!(
            count = universe.len(),
            threshold = self.config.thresholds.distance_threshold_percent,
            "screening {} instruments",
            universe.len()
        );

        let (instruments, fetch_skips) = self.fetch_candles(&universe).await;
        let mut outcome = evaluate_batch(
            instruments,
            &self.config.thresholds,
            self.config.concurrency,
        )
        .await;
        outcome.skips.extend(fetch_skips);

        self.dispatch_alerts(&outcome.records, &universe).await;

        for record in &outcome.records {
            debug!(
                symbol = %record.symbol,
                bbw = %format_value(record.indicators.bbw_percent),
                ema_distance = %format_value(record.ema_distance_percent),
                adx = %format_value(record.indicators.adx),
                bias = %record.directional_bias,
                alert = %record.alert_signal,
                "evaluated {}",
                record.symbol
            );
        }
        info!(
            records = outcome.records.len(),
            skips = outcome.skips.len(),
            "cycle complete: {} records, {} skipped",
            outcome.records.len(),
            outcome.skips.len()
        );

        self.latest = outcome.records.clone();
        Ok(outcome)
    }

    /// Fetch each instrument's candles with the same bounded, ordered
    /// concurrency as the pipeline. A failed fetch skips that instrument.
    async fn fetch_candles(&self, universe: &[Ticker]) -> (Vec<Instrument>, Vec<Skip>) {
        let fetched: Vec<Result<Instrument, Skip>> = stream::iter(universe)
            .map(|ticker| {
                let candles = Arc::clone(&self.candles);
                let interval = self.config.kline_interval.clone();
                let limit = self.config.kline_limit;
                async move {
                    match candles.get_candles(&ticker.symbol, &interval, limit).await {
                        Ok(candles) => Ok(Instrument {
                            symbol: ticker.symbol.clone(),
                            candles,
                        }),
                        Err(err) => Err(Skip {
                            symbol: ticker.symbol.clone(),
                            reason: SkipReason::FetchFailed(err.to_string()),
                        }),
                    }
                }
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut instruments = Vec::new();
        let mut skips = Vec::new();
        for result in fetched {
            match result {
                Ok(instrument) => instruments.push(instrument),
                Err(skip) => {
                    debug!(symbol = %skip.symbol, reason = %skip.reason, "skipping {}: {}", skip.symbol, skip.reason);
                    skips.push(skip);
                }
            }
        }
        (instruments, skips)
    }

    /// Send an alert for every record whose alert signal differs from the
    /// last one sent for that symbol. The signal is recorded after the
    /// attempt whether or not dispatch succeeded; send failures are logged,
    /// not retried within the cycle.
    async fn dispatch_alerts(&mut self, records: &[AnalysisRecord], universe: &[Ticker]) {
        for record in records {
            if record.alert_signal == SignalDirection::Neutral {
                continue;
            }
            if self.sent_alerts.get(&record.symbol) == Some(&record.alert_signal) {
                continue;
            }

            let last_price = universe
                .iter()
                .find(|ticker| ticker.symbol == record.symbol)
                .map(|ticker| ticker.last_price);
            let message = format_alert(record, last_price);

            if let Err(err) = self.notifier.send_alert(&message).await {
                error!(symbol = %record.symbol, error = %err, "failed to send alert for {}", record.symbol);
            } else {
                info!(
                    symbol = %record.symbol,
                    signal = %record.alert_signal,
                    "alert sent for {}: {}",
                    record.symbol,
                    record.alert_signal
                );
            }
            self.sent_alerts
                .insert(record.symbol.clone(), record.alert_signal);
        }
    }
}

/// Render an optional indicator value for presentation. Absent values read
/// as `N/A`, never as zero.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

fn format_alert(record: &AnalysisRecord, last_price: Option<f64>) -> String {
    let price = match last_price {
        Some(p) => format!("{}", p),
        None => "N/A".to_string(),
    };
    format!(
        "\u{1F30E} | <b>{}</b>\n\u{1F4B5} | Price: {}\n\u{1F4C8} | Signal: <b>{}</b> (bias: {})",
        record.symbol, price, record.alert_signal, record.directional_bias
    )
}
