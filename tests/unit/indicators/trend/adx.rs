//! Unit tests for the ADX indicator

use voltix::indicators::trend::calculate_adx;

fn uptrend(len: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    (highs, lows, closes)
}

#[test]
fn test_adx_absent_below_twice_period() {
    let (highs, lows, closes) = uptrend(27);
    let out = calculate_adx(&highs, &lows, &closes, 14);
    assert!(out.adx.is_none());
    assert!(out.plus_di.is_none());
    assert!(out.minus_di.is_none());
}

#[test]
fn test_adx_present_at_twice_period() {
    let (highs, lows, closes) = uptrend(28);
    let out = calculate_adx(&highs, &lows, &closes, 14);
    assert!(out.adx.is_some());
    assert!(out.plus_di.is_some());
    assert!(out.minus_di.is_some());
}

#[test]
fn test_adx_flat_market_zero_range_guard() {
    // Identical bars: zero true range and zero directional movement must
    // resolve to defined zeros, not NaN from a division.
    let flat = vec![100.0; 40];
    let out = calculate_adx(&flat, &flat, &flat, 14);
    assert_eq!(out.plus_di, Some(0.0));
    assert_eq!(out.minus_di, Some(0.0));
    assert_eq!(out.adx, Some(0.0));
}

#[test]
fn test_adx_uptrend_favors_plus_di() {
    let (highs, lows, closes) = uptrend(60);
    let out = calculate_adx(&highs, &lows, &closes, 14);
    let plus = out.plus_di.unwrap();
    let minus = out.minus_di.unwrap();
    assert!(plus > minus);
    assert_eq!(minus, 0.0);
    // Every DX in a one-way trend is 100, so the smoothed ADX is too.
    assert!((out.adx.unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_adx_downtrend_favors_minus_di() {
    let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let out = calculate_adx(&highs, &lows, &closes, 14);
    assert!(out.minus_di.unwrap() > out.plus_di.unwrap());
}

#[test]
fn test_adx_finite_on_noisy_data() {
    let closes: Vec<f64> = (0..80)
        .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let out = calculate_adx(&highs, &lows, &closes, 14);
    let adx = out.adx.unwrap();
    assert!(adx.is_finite());
    assert!((0.0..=100.0).contains(&adx));
}
