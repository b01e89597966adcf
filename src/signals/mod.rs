//! Signal classification and batch evaluation.

pub mod classifier;
pub mod engine;
pub mod pipeline;

pub use classifier::{classify, Classification};
pub use engine::AnalysisEngine;
pub use pipeline::{evaluate_batch, BatchOutcome, Instrument};
