use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Runtime settings, read once at startup. The Telegram pair is optional:
/// without it the service still accepts submissions and only skips the relay.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub pdf_service_url: Url,
    pub telegram_bot_token: Option<String>,
    pub admin_chat_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a port number")?,
            Err(_) => 3000,
        };

        let pdf_service_url = env::var("PDF_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let pdf_service_url =
            Url::parse(&pdf_service_url).context("PDF_SERVICE_URL must be a valid URL")?;

        Ok(Config {
            port,
            pdf_service_url,
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok().filter(|v| !v.is_empty()),
            admin_chat_id: env::var("ADMIN_CHAT_ID").ok().filter(|v| !v.is_empty()),
        })
    }
}
