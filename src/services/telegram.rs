//! Telegram notification sink.

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::services::market_data::BoxError;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Accepts a pre-formatted alert message for dispatch.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_alert(&self, message: &str) -> Result<(), BoxError>;
}

/// Sends alerts through the Telegram `sendMessage` API with HTML parse mode.
/// Missing credentials disable dispatch with a warning rather than failing
/// the cycle.
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl TelegramNotifier {
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(
            DEFAULT_BASE_URL,
            reqwest::Client::new(),
            config.telegram_bot_token.clone(),
            config.telegram_chat_id.clone(),
        )
    }

    /// Custom base URL and client, used by tests to point at a mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        client: reqwest::Client,
        bot_token: Option<String>,
        chat_id: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            bot_token,
            chat_id,
        }
    }
}

#[async_trait]
impl NotificationSink for TelegramNotifier {
    async fn send_alert(&self, message: &str) -> Result<(), BoxError> {
        let (Some(token), Some(chat_id)) = (self.bot_token.as_deref(), self.chat_id.as_deref())
        else {
            warn!("Telegram bot token or chat id not configured, skipping alert");
            return Ok(());
        };

        let url = format!("{}/bot{}/sendMessage", self.base_url, token);
        let payload = json!({
            "chat_id": chat_id,
            "text": message,
            "parse_mode": "HTML",
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("telegram send failed: {} ({})", status, body).into());
        }
        Ok(())
    }
}
