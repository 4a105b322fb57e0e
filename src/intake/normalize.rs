use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::models::registration::{RegistrationInput, RegistrationRecord};

/// Maps an already-validated submission to its canonical record. The caller
/// supplies the request id and timestamp so the mapping itself stays pure.
pub fn normalize(
    input: &RegistrationInput,
    request_id: String,
    submitted_at: DateTime<Utc>,
) -> RegistrationRecord {
    RegistrationRecord {
        full_name: title_case(input.full_name.as_deref().unwrap_or("")),
        phone: normalize_phone(input.phone.as_deref().unwrap_or("")),
        email: normalize_email(input.email.as_deref().unwrap_or("")),
        birth_date: input.birth_date.as_deref().unwrap_or("").trim().to_string(),
        submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        request_id,
    }
}

/// 8-character uppercase correlation id, fresh per submission.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()[..8].to_uppercase()
}

/// Trims, lower-cases and re-capitalizes the first letter of every
/// whitespace-separated token, joining with single spaces.
pub fn title_case(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Canonicalizes a phone to `+7XXXXXXXXXX`. An input that still has the wrong
/// digit count after stripping falls back to the last 10 digits; validation
/// already guarantees at least 10, so the output is always 12 characters.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with('8') {
        format!("+7{}", &digits[1..])
    } else if digits.len() == 11 && digits.starts_with('7') {
        format!("+{digits}")
    } else if digits.len() == 10 {
        format!("+7{digits}")
    } else {
        let tail = if digits.len() > 10 { &digits[digits.len() - 10..] } else { &digits[..] };
        format!("+7{tail}")
    }
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
