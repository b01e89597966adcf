//! Batch analysis pipeline: fan one evaluation out per instrument with
//! bounded concurrency and settle-all failure isolation.

use futures_util::{stream, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::Thresholds;
use crate::models::{AnalysisRecord, Candle, Skip, SkipReason};
use crate::signals::engine::AnalysisEngine;

/// One instrument ready for evaluation.
#[derive(Debug, Clone)]
pub struct Instrument {
    pub symbol: String,
    pub candles: Vec<Candle>,
}

/// Successful records and structured skips for one batch. A batch with zero
/// eligible instruments is an empty outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<AnalysisRecord>,
    pub skips: Vec<Skip>,
}

/// Evaluate a batch of instruments.
///
/// Each instrument runs on its own task so one panicking evaluation cannot
/// take its siblings down; the buffered stream bounds parallelism and keeps
/// the output in input order. Skipped instruments are logged and collected,
/// never fatal to the batch.
pub async fn evaluate_batch(
    instruments: Vec<Instrument>,
    thresholds: &Thresholds,
    concurrency: usize,
) -> BatchOutcome {
    let thresholds = Arc::new(thresholds.clone());

    let mut results = stream::iter(instruments)
        .map(|instrument| {
            let thresholds = Arc::clone(&thresholds);
            async move {
                let symbol = instrument.symbol.clone();
                let joined = tokio::spawn(async move {
                    AnalysisEngine::evaluate(&instrument.symbol, &instrument.candles, &thresholds)
                })
                .await;
                (symbol, joined)
            }
        })
        .buffered(concurrency.max(1));

    let mut outcome = BatchOutcome::default();
    while let Some((symbol, joined)) = results.next().await {
        match joined {
            Ok(Ok(record)) => outcome.records.push(record),
            Ok(Err(reason)) => {
                debug!(symbol = %symbol, reason = %reason, "skipping {}: {}", symbol, reason);
                outcome.skips.push(Skip { symbol, reason });
            }
            Err(join_err) => {
                warn!(symbol = %symbol, error = %join_err, "evaluation task failed for {}", symbol);
                outcome.skips.push(Skip {
                    symbol,
                    reason: SkipReason::TaskFailed(join_err.to_string()),
                });
            }
        }
    }
    outcome
}
