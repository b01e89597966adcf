//! Cron-based scheduler driving the evaluation cycles.

use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};

use crate::services::market_data::BoxError;

/// One scheduler tick; the receiver runs a screening cycle per tick.
#[derive(Debug, Clone, Copy)]
pub struct CycleTick;

/// Periodically emits [`CycleTick`]s on a channel, driven by a cron schedule
/// derived from the configured refresh interval.
pub struct CycleScheduler {
    schedule: Schedule,
    tick_tx: mpsc::Sender<CycleTick>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl CycleScheduler {
    /// Build a scheduler ticking every `interval_seconds`.
    ///
    /// The interval is mapped onto a cron expression, so it should be a
    /// divisor of 60 when below a minute and a whole number of minutes
    /// otherwise. Other values still tick, but at the rounded cadence (90s
    /// runs every minute) or with uneven gaps (45s ticks at :00 and :45).
    pub fn new(interval_seconds: u64, tick_tx: mpsc::Sender<CycleTick>) -> Result<Self, BoxError> {
        if interval_seconds == 0 {
            return Err("scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("invalid cron expression '{}': {}", cron_expr, e))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "scheduler created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            schedule,
            tick_tx,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn start(&self) {
        let schedule = self.schedule.clone();
        let tick_tx = self.tick_tx.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("scheduler started, waiting for first tick");
            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                debug!("scheduler tick");
                if tick_tx.send(CycleTick).await.is_err() {
                    // Receiver gone, runtime is shutting down.
                    break;
                }
            }
        });

        let mut slot = handle_arc.write().await;
        *slot = Some(handle);
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scheduler stopped");
        }
    }
}
