//! Contract models for translation service
//!
//! These models are transport-agnostic and used for inter-module communication.

use chrono::{DateTime, Utc};

/// Largest page size accepted by history listings
pub const MAX_PAGE_LIMIT: u64 = 500;

/// Language offered by the upstream translation API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    /// Language code as the upstream expects it (e.g. "en", "zh-CN")
    pub code: String,
    /// Human readable name
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Request to translate a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCommand {
    /// Text to translate; split into words on single spaces
    pub input_text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
    /// Address of the caller, stored with the translation
    pub ip_address: String,
}

/// Stored translation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub id: i64,
    pub ip_address: String,
    pub input_text: String,
    pub translated_text: String,
    pub created_at: DateTime<Utc>,
}

/// Translation record before it has been assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub ip_address: String,
    pub input_text: String,
    pub translated_text: String,
}

/// Offset pagination for history listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    /// Build a page, clamping the limit into `1..=MAX_PAGE_LIMIT`
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
            offset,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}
