//! Unit tests for the batch analysis pipeline

use chrono::Utc;
use voltix::config::Thresholds;
use voltix::models::{Candle, SkipReason};
use voltix::signals::pipeline::{evaluate_batch, Instrument};

fn test_thresholds() -> Thresholds {
    Thresholds {
        ema_short_period: 5,
        ema_long_period: 10,
        bbw_period: 5,
        adx_period: 3,
        ..Thresholds::default()
    }
}

fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|_| Candle::new(price, price, price, price, 1000.0, Utc::now()))
        .collect()
}

fn instrument(symbol: &str, candles: Vec<Candle>) -> Instrument {
    Instrument {
        symbol: symbol.to_string(),
        candles,
    }
}

#[tokio::test]
async fn test_batch_tolerates_bad_instruments() {
    let thresholds = test_thresholds();
    let good = instrument("GOODUSDT", flat_candles(20, 100.0));
    let short = instrument("SHORTUSDT", flat_candles(5, 100.0));

    let mut malformed_candles = flat_candles(20, 100.0);
    for candle in malformed_candles.iter_mut().take(4) {
        candle.high = f64::NAN;
    }
    let malformed = instrument("NANUSDT", malformed_candles);

    let outcome = evaluate_batch(vec![good, short, malformed], &thresholds, 4).await;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].symbol, "GOODUSDT");

    assert_eq!(outcome.skips.len(), 2);
    assert_eq!(outcome.skips[0].symbol, "SHORTUSDT");
    assert_eq!(
        outcome.skips[0].reason,
        SkipReason::InsufficientSamples { have: 5, need: 10 }
    );
    assert_eq!(outcome.skips[1].symbol, "NANUSDT");
    assert!(matches!(
        outcome.skips[1].reason,
        SkipReason::MismatchedArrays { highs: 16, .. }
    ));
}

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let thresholds = test_thresholds();
    let symbols = ["AUSDT", "BUSDT", "CUSDT", "DUSDT", "EUSDT"];
    let instruments: Vec<Instrument> = symbols
        .iter()
        .map(|s| instrument(s, flat_candles(20, 100.0)))
        .collect();

    let outcome = evaluate_batch(instruments, &thresholds, 2).await;
    let order: Vec<&str> = outcome.records.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, symbols);
}

#[tokio::test]
async fn test_empty_batch_is_empty_outcome() {
    let outcome = evaluate_batch(Vec::new(), &test_thresholds(), 4).await;
    assert!(outcome.records.is_empty());
    assert!(outcome.skips.is_empty());
}

#[tokio::test]
async fn test_flat_instrument_record_values() {
    // 20 identical closes: EMA equals the constant, bandwidth is zero,
    // distance is zero, flat ADX components.
    let thresholds = test_thresholds();
    let outcome = evaluate_batch(
        vec![instrument("FLATUSDT", flat_candles(20, 100.0))],
        &thresholds,
        1,
    )
    .await;

    let record = &outcome.records[0];
    assert_eq!(record.indicators.ema_short, Some(100.0));
    assert_eq!(record.indicators.ema_long, Some(100.0));
    assert_eq!(record.indicators.bbw_percent, Some(0.0));
    assert_eq!(record.ema_distance_percent, Some(0.0));
    assert_eq!(record.indicators.plus_di, Some(0.0));
    assert_eq!(record.indicators.minus_di, Some(0.0));
}

#[tokio::test]
async fn test_one_short_sample_below_the_minimum_skips() {
    // The gate is the max of the indicator windows; one candle short of the
    // long EMA window skips even though every other window is satisfied.
    let thresholds = Thresholds {
        ema_short_period: 5,
        ema_long_period: 50,
        bbw_period: 5,
        adx_period: 3,
        ..Thresholds::default()
    };
    let candles = flat_candles(49, 100.0);
    let outcome = evaluate_batch(vec![instrument("MIDUSDT", candles)], &thresholds, 1).await;
    assert!(outcome.records.is_empty());
    assert_eq!(
        outcome.skips[0].reason,
        SkipReason::InsufficientSamples { have: 49, need: 50 }
    );
}
