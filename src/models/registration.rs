use serde::{Deserialize, Serialize};

/// Raw form fields exactly as the client posted them. Nothing is guaranteed
/// here: any field may be missing, empty or garbage.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrationInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<String>,
}

/// A submission that passed validation, every field in canonical form.
/// Serialized as-is to the document renderer and dropped after the request.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRecord {
    /// Title-cased, single spaces between tokens.
    pub full_name: String,
    /// `+7XXXXXXXXXX`, exactly 12 characters.
    pub phone: String,
    /// Trimmed and lower-cased.
    pub email: String,
    /// `DD.MM.YYYY`, already pattern-checked.
    pub birth_date: String,
    /// RFC 3339 UTC timestamp.
    pub submitted_at: String,
    /// 8-character uppercase id, used only to correlate logs and messages.
    pub request_id: String,
}
