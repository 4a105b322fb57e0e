use anyhow::{Context, Result, bail};
use reqwest::Client;
use url::Url;

use crate::models::registration::RegistrationRecord;

/// Client for the document-rendering service.
pub struct PdfClient {
    http: Client,
    base_url: Url,
}

impl PdfClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        PdfClient { http, base_url }
    }

    /// Posts the record to `/generate_pdf` and returns the raw PDF bytes.
    pub async fn generate(&self, record: &RegistrationRecord) -> Result<Vec<u8>> {
        let url = self
            .base_url
            .join("generate_pdf")
            .context("invalid PDF service URL")?;

        let response = self
            .http
            .post(url)
            .json(record)
            .send()
            .await
            .context("PDF service request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("PDF service returned {status}");
        }

        let body = response
            .bytes()
            .await
            .context("failed to read PDF service response")?;
        Ok(body.to_vec())
    }
}
