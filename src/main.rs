//! Voltix screener binary.
//!
//! Wires the Binance market data provider and Telegram sink into the
//! screener runtime and drives it from the cycle scheduler until ctrl-c.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};

use voltix::config::{get_environment, Config};
use voltix::core::runtime::ScreenerRuntime;
use voltix::core::scheduler::CycleScheduler;
use voltix::logging;
use voltix::services::binance::BinanceMarketData;
use voltix::services::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(environment = %get_environment(), "starting voltix screener");
    info!(
        interval = %config.kline_interval,
        refresh = config.refresh_interval_seconds,
        distance_threshold = config.thresholds.distance_threshold_percent,
        bbw_threshold = config.thresholds.bbw_threshold_percent,
        "screening config loaded"
    );

    let market = Arc::new(BinanceMarketData::new(config.min_change_percent));
    let notifier = Arc::new(TelegramNotifier::from_config(&config));

    let refresh_interval = config.refresh_interval_seconds;
    let mut runtime = ScreenerRuntime::new(config, market.clone(), market, notifier);

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let scheduler = CycleScheduler::new(refresh_interval, tick_tx)?;
    scheduler.start().await;

    // First cycle runs immediately rather than waiting out the interval.
    if let Err(err) = runtime.run_cycle().await {
        error!(error = %err, "initial cycle failed");
    }

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            tick = tick_rx.recv() => match tick {
                Some(_) => {
                    if let Err(err) = runtime.run_cycle().await {
                        error!(error = %err, "cycle failed");
                    }
                }
                None => break,
            },
        }
    }

    scheduler.stop().await;
    Ok(())
}
