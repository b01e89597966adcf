//! Trend indicators

pub mod adx;
pub mod ema;

pub use adx::{calculate_adx, AdxOutput};
pub use ema::calculate_ema;
