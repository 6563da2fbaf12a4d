//! Upstream JSON bodies

use serde::{Deserialize, Serialize};

/// Body of a single-word translation request
#[derive(Debug, Serialize)]
pub struct TranslateWordRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranslateWordResponse {
    pub data: TranslationsData,
}

#[derive(Debug, Deserialize)]
pub struct TranslationsData {
    #[serde(default)]
    pub translations: Vec<TranslatedItem>,
}

#[derive(Debug, Deserialize)]
pub struct TranslatedItem {
    #[serde(rename = "translatedText", default)]
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguagesResponse {
    pub data: LanguagesData,
}

#[derive(Debug, Deserialize)]
pub struct LanguagesData {
    #[serde(default)]
    pub languages: Vec<LanguageItem>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageItem {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub name: String,
}
