//! Core application primitives (runtime, scheduling)

pub mod runtime;
pub mod scheduler;

pub use runtime::ScreenerRuntime;
pub use scheduler::{CycleScheduler, CycleTick};
