use anyhow::{Result, bail};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::json;

const API_BASE: &str = "https://api.telegram.org";

/// Bot API client bound to one admin chat.
pub struct TelegramClient {
    http: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(http: Client, bot_token: String, chat_id: String) -> Self {
        TelegramClient { http, bot_token, chat_id }
    }

    pub async fn send_message(&self, text: &str) -> Result<()> {
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("sendMessage failed: {status} - {body}");
        }
        Ok(())
    }

    pub async fn send_document(
        &self,
        filename: &str,
        document: Vec<u8>,
        caption: &str,
    ) -> Result<()> {
        let part = Part::bytes(document)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .part("document", part)
            .text("caption", caption.to_string());

        let response = self
            .http
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("sendDocument failed: {status} - {body}");
        }
        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{API_BASE}/bot{}/{method}", self.bot_token)
    }
}
