//! Voltix screens a universe of traded instruments for short-term
//! volatility setups: EMA distance, percentage Bollinger bandwidth, and
//! ADX/+DI/-DI computed per instrument, classified into LONG/SHORT alerts
//! by threshold rules.
//!
//! The indicator engine and classifier are pure; data sources, the
//! notification sink, and the refresh scheduler live behind seams in
//! [`services`] and [`core`].

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
