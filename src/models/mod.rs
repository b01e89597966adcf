//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod candle;

pub use analysis::{AnalysisRecord, IndicatorSnapshot, SignalDirection, Skip, SkipReason, Ticker};
pub use candle::Candle;
