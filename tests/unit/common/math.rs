//! Unit tests for the shared numeric primitives

use voltix::common::math;

#[test]
fn test_ema_short_series_is_none() {
    assert!(math::ema(&[1.0, 2.0], 3).is_none());
    assert!(math::ema(&[], 1).is_none());
}

#[test]
fn test_ema_seed_is_simple_average() {
    // Exactly `period` values: no smoothing steps, result is the SMA.
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::ema(&values, 5), Some(3.0));
}

#[test]
fn test_ema_recurrence_hand_computed() {
    // seed = (2+4)/2 = 3, k = 2/3
    // step 1: 6 * 2/3 + 3 * 1/3 = 5
    // step 2: 8 * 2/3 + 5 * 1/3 = 7
    let values = [2.0, 4.0, 6.0, 8.0];
    let ema = math::ema(&values, 2).unwrap();
    assert!((ema - 7.0).abs() < 1e-12);
}

#[test]
fn test_ema_series_length_and_endpoint() {
    let values = [2.0, 4.0, 6.0, 8.0];
    let series = math::ema_series(&values, 2);
    assert_eq!(series.len(), 3);
    assert!((series[0] - 3.0).abs() < 1e-12);
    assert_eq!(series.last().copied(), math::ema(&values, 2));
}

#[test]
fn test_ema_series_short_input_is_empty() {
    assert!(math::ema_series(&[1.0], 2).is_empty());
}

#[test]
fn test_mean() {
    assert_eq!(math::mean(&[1.0, 2.0, 3.0]), Some(2.0));
    assert!(math::mean(&[]).is_none());
}

#[test]
fn test_population_std_dev() {
    // Classic example with population σ = 2.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = math::population_std_dev(&values).unwrap();
    assert!((std - 2.0).abs() < 1e-12);
}

#[test]
fn test_true_range_dominant_legs() {
    // Plain high-low range.
    assert_eq!(math::true_range(10.0, 8.0, 9.0), 2.0);
    // Gap up: |high - prev_close| dominates.
    assert_eq!(math::true_range(15.0, 14.0, 10.0), 5.0);
    // Gap down: |low - prev_close| dominates.
    assert_eq!(math::true_range(6.0, 5.0, 10.0), 5.0);
}
