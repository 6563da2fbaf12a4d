//! Port to the upstream translation API
//!
//! Implementation is in infra/upstream/client.rs

use crate::contract::{Language, TranslationError};
use async_trait::async_trait;

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Languages the upstream can translate between
    async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError>;

    /// Translate a single word
    async fn translate_word(
        &self,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}
