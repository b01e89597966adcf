//! Volatility indicators

pub mod bollinger;

pub use bollinger::bandwidth_percent;
