//! Domain service - translation orchestration

use super::provider::TranslationProvider;
use super::repository::TranslationRepository;
use super::retry::RetryPolicy;
use super::validation::{validate_input_text, validate_language_code};
use crate::contract::{
    Language, LanguageRole, NewTranslation, Page, TranslateCommand, Translation, TranslationError,
};
use futures::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Tunables for [`Service`]
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Words translated in parallel per request
    pub max_concurrency: usize,
    /// Longest accepted input, in characters
    pub max_input_length: usize,
    /// Retry schedule for upstream calls
    pub retry: RetryPolicy,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
            max_input_length: 10_000,
            retry: RetryPolicy::default(),
        }
    }
}

/// Domain service for translations
pub struct Service {
    provider: Arc<dyn TranslationProvider>,
    repository: Arc<dyn TranslationRepository>,
    options: ServiceOptions,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        repository: Arc<dyn TranslationRepository>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            provider,
            repository,
            options,
        }
    }

    /// Translate a text word by word and store the result
    ///
    /// The text is split on single spaces, each non-empty word is sent to the
    /// upstream separately and the translations are joined back in input order.
    pub async fn translate(&self, cmd: TranslateCommand) -> Result<String, TranslationError> {
        validate_input_text(&cmd.input_text, self.options.max_input_length)?;
        validate_language_code(LanguageRole::Source, &cmd.source_language)?;
        validate_language_code(LanguageRole::Target, &cmd.target_language)?;

        let translated_text = self
            .options
            .retry
            .run("translate", || self.translate_text(&cmd))
            .await?;

        let record = NewTranslation {
            ip_address: cmd.ip_address,
            input_text: cmd.input_text,
            translated_text: translated_text.clone(),
        };
        let saved = self.repository.save(&record).await.map_err(|e| {
            tracing::error!(error = ?e, "failed to store translation");
            TranslationError::internal(e.to_string())
        })?;

        tracing::info!(
            translation_id = saved.id,
            source = %cmd.source_language,
            target = %cmd.target_language,
            "translation stored"
        );
        Ok(translated_text)
    }

    async fn translate_text(&self, cmd: &TranslateCommand) -> Result<String, TranslationError> {
        let languages = self.provider.supported_languages().await?;
        ensure_supported(&languages, LanguageRole::Source, &cmd.source_language)?;
        ensure_supported(&languages, LanguageRole::Target, &cmd.target_language)?;

        let source = cmd.source_language.as_str();
        let target = cmd.target_language.as_str();
        let segments: Vec<String> = cmd.input_text.split(' ').map(str::to_owned).collect();
        let words: Vec<String> = stream::iter(segments)
            .map(|word| async move {
                if word.is_empty() {
                    Ok(String::new())
                } else {
                    self.provider.translate_word(&word, source, target).await
                }
            })
            .buffered(self.options.max_concurrency.max(1))
            .try_collect()
            .await?;

        Ok(words.join(" "))
    }

    /// Languages the upstream can translate between, sorted by code
    pub async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError> {
        let mut languages = self
            .options
            .retry
            .run("supported_languages", || self.provider.supported_languages())
            .await?;
        languages.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(languages)
    }

    /// Get a stored translation
    pub async fn get_translation(&self, id: i64) -> Result<Translation, TranslationError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| TranslationError::internal(e.to_string()))?
            .ok_or_else(|| TranslationError::NotFound {
                resource: "translation".to_string(),
                id: id.to_string(),
            })
    }

    /// List stored translations, newest first, with the total count
    pub async fn list_translations(
        &self,
        page: Page,
    ) -> Result<(Vec<Translation>, u64), TranslationError> {
        let items = self
            .repository
            .list(page.limit, page.offset)
            .await
            .map_err(|e| TranslationError::internal(e.to_string()))?;
        let total = self
            .repository
            .count()
            .await
            .map_err(|e| TranslationError::internal(e.to_string()))?;
        Ok((items, total))
    }
}

fn ensure_supported(
    languages: &[Language],
    role: LanguageRole,
    code: &str,
) -> Result<(), TranslationError> {
    if languages.iter().any(|l| l.code == code) {
        Ok(())
    } else {
        Err(TranslationError::LanguageNotFound {
            role,
            code: code.to_string(),
        })
    }
}
