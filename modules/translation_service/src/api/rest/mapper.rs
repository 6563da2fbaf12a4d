//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract::{self, Page};

impl From<contract::Language> for LanguageDto {
    fn from(language: contract::Language) -> Self {
        Self {
            language: language.code,
            name: language.name,
        }
    }
}

impl From<contract::Translation> for TranslationDto {
    fn from(translation: contract::Translation) -> Self {
        Self {
            id: translation.id,
            ip_address: translation.ip_address,
            input_text: translation.input_text,
            translated_text: translation.translated_text,
            created_at: translation.created_at,
        }
    }
}

impl TranslationRequestDto {
    pub fn into_command(self, ip_address: String) -> contract::TranslateCommand {
        contract::TranslateCommand {
            input_text: self.input_text,
            source_language: self.source_language,
            target_language: self.target_language,
            ip_address,
        }
    }
}

impl From<ListTranslationsQuery> for Page {
    fn from(query: ListTranslationsQuery) -> Self {
        let defaults = Page::default();
        Page::new(
            query.limit.unwrap_or(defaults.limit),
            query.offset.unwrap_or(defaults.offset),
        )
    }
}
