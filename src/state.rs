use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::clients::pdf::PdfClient;
use crate::clients::telegram::TelegramClient;
use crate::config::Config;

/// Outbound clients shared across requests via `web::Data`.
pub struct AppState {
    pub pdf: PdfClient,
    pub telegram: Option<TelegramClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        let pdf = PdfClient::new(http.clone(), config.pdf_service_url.clone());

        let telegram = match (&config.telegram_bot_token, &config.admin_chat_id) {
            (Some(token), Some(chat_id)) => {
                Some(TelegramClient::new(http, token.clone(), chat_id.clone()))
            }
            _ => None,
        };

        Ok(AppState { pdf, telegram })
    }
}
