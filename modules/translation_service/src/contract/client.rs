//! Native client trait for inter-module communication
//!
//! NO HTTP - direct function calls into the translation service.

use super::{
    error::TranslationError,
    model::{Language, Page, TranslateCommand, Translation},
};
use async_trait::async_trait;

/// Translation service API for inter-module communication
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Translate a text word by word and store the result
    async fn translate(&self, cmd: TranslateCommand) -> Result<String, TranslationError>;

    /// Languages the upstream can translate between
    async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError>;

    /// Get a stored translation
    async fn get_translation(&self, id: i64) -> Result<Translation, TranslationError>;

    /// List stored translations, newest first, with the total count
    async fn list_translations(
        &self,
        page: Page,
    ) -> Result<(Vec<Translation>, u64), TranslationError>;
}
