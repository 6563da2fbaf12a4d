//! RapidAPI Google Translate client

use super::wire::{LanguagesResponse, TranslateWordRequest, TranslateWordResponse};
use crate::config::Config;
use crate::contract::{Language, TranslationError};
use crate::domain::TranslationProvider;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response};
use std::collections::HashSet;
use std::time::{Duration, Instant};

const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

/// Cached supported-language list
struct CachedLanguages {
    fetched_at: Instant,
    languages: Vec<Language>,
}

/// [`TranslationProvider`] backed by the RapidAPI Google Translate endpoints
pub struct RapidApiTranslator {
    http: Client,
    api_key: String,
    api_host: String,
    translate_url: String,
    languages_url: String,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedLanguages>>,
}

impl RapidApiTranslator {
    /// Build a client from module configuration
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            translate_url: config.translate_url.clone(),
            languages_url: config.api_url.clone(),
            cache_ttl: config.languages_cache_ttl,
            cache: RwLock::new(None),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(RAPIDAPI_KEY_HEADER, &self.api_key)
            .header(RAPIDAPI_HOST_HEADER, &self.api_host)
    }

    fn cached_languages(&self) -> Option<Vec<Language>> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        self.cache
            .read()
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.cache_ttl)
            .map(|cached| cached.languages.clone())
    }

    async fn fetch_languages(&self) -> Result<Vec<Language>, TranslationError> {
        let response = self
            .authorized(self.http.get(&self.languages_url))
            .send()
            .await
            .map_err(transport_error)?;
        let body: LanguagesResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| {
                TranslationError::upstream_access(format!("invalid languages response: {e}"))
            })?;

        let mut seen = HashSet::new();
        let languages: Vec<Language> = body
            .data
            .languages
            .into_iter()
            .map(|item| Language::new(item.language, item.name))
            .filter(|language| seen.insert(language.clone()))
            .collect();

        tracing::debug!(count = languages.len(), "fetched supported languages");
        Ok(languages)
    }
}

#[async_trait]
impl TranslationProvider for RapidApiTranslator {
    async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError> {
        if let Some(languages) = self.cached_languages() {
            return Ok(languages);
        }

        let languages = self.fetch_languages().await?;
        if !self.cache_ttl.is_zero() {
            *self.cache.write() = Some(CachedLanguages {
                fetched_at: Instant::now(),
                languages: languages.clone(),
            });
        }
        Ok(languages)
    }

    async fn translate_word(
        &self,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let request = TranslateWordRequest {
            q: word,
            source: source_language,
            target: target_language,
        };
        let response = self
            .authorized(self.http.post(&self.translate_url))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let body = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(transport_error)?;

        parse_translated_word(&body)
    }
}

/// Extract and URL-decode the first translation of a translate response
pub fn parse_translated_word(body: &str) -> Result<String, TranslationError> {
    let parsed: TranslateWordResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::upstream_access(format!("invalid response format: {e}")))?;

    let first = parsed
        .data
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| TranslationError::upstream_access("invalid response format: no translations"))?;

    // form encoding: '+' stands for a space
    let plus_decoded = first.translated_text.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|text| text.into_owned())
        .map_err(|e| TranslationError::upstream_access(format!("undecodable translation: {e}")))
}

async fn ensure_success(response: Response) -> Result<Response, TranslationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %message, "upstream returned error status");
    Err(TranslationError::UpstreamStatus {
        status: status.as_u16(),
        message,
    })
}

fn transport_error(err: reqwest::Error) -> TranslationError {
    TranslationError::upstream_access(err.to_string())
}
