//! External collaborators: market data sources and notification sinks.

pub mod binance;
pub mod market_data;
pub mod telegram;

pub use binance::BinanceMarketData;
pub use market_data::{BoxError, CandleSource, InstrumentSource};
pub use telegram::{NotificationSink, TelegramNotifier};
