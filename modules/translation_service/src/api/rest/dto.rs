//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Translation DTOs =====

/// Translate request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequestDto {
    /// Text to translate, words are separated by single spaces
    #[serde(default)]
    #[schema(example = "Hello world")]
    pub input_text: String,

    /// Source language code
    #[serde(default)]
    #[schema(example = "en")]
    pub source_language: String,

    /// Target language code
    #[serde(default)]
    #[schema(example = "ru")]
    pub target_language: String,
}

/// Translate response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponseDto {
    #[schema(example = "Привет мир")]
    pub translated_text: String,
}

/// Supported language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    /// Language code
    #[schema(example = "en")]
    pub language: String,

    /// Language name
    #[schema(example = "English")]
    pub name: String,
}

// ===== History DTOs =====

/// Stored translation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationDto {
    pub id: i64,
    #[schema(example = "127.0.0.1")]
    pub ip_address: String,
    pub input_text: String,
    pub translated_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of stored translations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationsListResponse {
    pub items: Vec<TranslationDto>,

    /// Total count of stored translations
    pub total: u64,
}

/// Pagination for the history listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTranslationsQuery {
    /// Page size (1-500, default 50)
    pub limit: Option<u64>,
    /// Records to skip (default 0)
    pub offset: Option<u64>,
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}
