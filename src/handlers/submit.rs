use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::clients::pdf::PdfClient;
use crate::clients::telegram::TelegramClient;
use crate::models::registration::RegistrationRecord;

const DOCUMENT_CAPTION: &str = "📄 Анкета клиента";

// Notification timestamps are shown in the admins' local time (MSK, no DST).
static MSK: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::east_opt(3 * 3600).expect("offset in range"));

// Attachment filenames keep Latin/Cyrillic letters and underscores only.
static FILENAME_SAFE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-zА-Яа-я_]").unwrap());

/// Renders the consent form and relays it to the admin chat. Rendering is
/// mandatory; the relay only runs when Telegram credentials are configured.
pub async fn process(
    pdf: &PdfClient,
    telegram: Option<&TelegramClient>,
    record: &RegistrationRecord,
) -> Result<()> {
    info!("[{}] requesting rendered application form", record.request_id);
    let document = pdf.generate(record).await?;
    info!("[{}] received document, {} bytes", record.request_id, document.len());

    let Some(relay) = telegram else {
        info!("[{}] Telegram is not configured, skipping relay", record.request_id);
        return Ok(());
    };

    let now = Utc::now();
    relay.send_message(&notification_text(record, now)).await?;
    relay
        .send_document(&document_filename(record, now), document, DOCUMENT_CAPTION)
        .await?;
    info!("[{}] relayed to Telegram", record.request_id);

    Ok(())
}

fn notification_text(record: &RegistrationRecord, at: DateTime<Utc>) -> String {
    format!(
        "<b>📋 Новая заявка #{}</b>\n\n\
         <b>ФИО:</b> {}\n\
         <b>Телефон:</b> {}\n\
         <b>Email:</b> {}\n\
         <b>Дата рождения:</b> {}\n\
         <b>Время:</b> {}",
        record.request_id,
        record.full_name,
        record.phone,
        record.email,
        record.birth_date,
        at.with_timezone(&*MSK).format("%d.%m.%Y %H:%M:%S"),
    )
}

fn document_filename(record: &RegistrationRecord, at: DateTime<Utc>) -> String {
    let joined = record.full_name.split_whitespace().collect::<Vec<_>>().join("_");
    let safe = FILENAME_SAFE_RE.replace_all(&joined, "");
    format!("Consent_{}_{}.pdf", safe, at.format("%Y-%m-%dT%H-%M"))
}
