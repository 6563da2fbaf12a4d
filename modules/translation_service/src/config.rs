//! Configuration for translation service module

use crate::domain::{RetryPolicy, ServiceOptions};
use serde::Deserialize;
use std::time::Duration;

/// Translation service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// RapidAPI key sent as `x-rapidapi-key`
    #[serde(default)]
    pub api_key: String,

    /// Value of the `x-rapidapi-host` header
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Single-word translate endpoint
    #[serde(default = "default_translate_url")]
    pub translate_url: String,

    /// Supported languages endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Words translated in parallel per request
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Longest accepted input text, in characters
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,

    /// Timeout of a single upstream request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// How long the supported-language list is reused; zero disables caching
    #[serde(default = "default_languages_cache_ttl", with = "humantime_serde")]
    pub languages_cache_ttl: Duration,

    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: default_api_host(),
            translate_url: default_translate_url(),
            api_url: default_api_url(),
            max_concurrency: default_max_concurrency(),
            max_input_length: default_max_input_length(),
            request_timeout: default_request_timeout(),
            languages_cache_ttl: default_languages_cache_ttl(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Check values serde cannot
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("translation.api_key must be set");
        }
        for (field, value) in [
            ("translate_url", &self.translate_url),
            ("api_url", &self.api_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| anyhow::anyhow!("translation.{field} '{value}' is not a valid URL: {e}"))?;
        }
        if self.max_concurrency == 0 {
            anyhow::bail!("translation.max_concurrency must be greater than zero");
        }
        Ok(())
    }

    /// Longest a translate call can take when its words fit in one concurrent batch:
    /// every attempt times out on the languages request and on a word request,
    /// plus the backoff in between
    pub fn worst_case_latency(&self) -> Duration {
        let attempts = self.retry.max_attempts.max(1);
        self.request_timeout * 2 * attempts + self.retry.total_backoff()
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            max_concurrency: self.max_concurrency,
            max_input_length: self.max_input_length,
            retry: self.retry.clone(),
        }
    }
}

fn default_api_host() -> String {
    "google-translator9.p.rapidapi.com".to_string()
}

fn default_translate_url() -> String {
    "https://google-translator9.p.rapidapi.com/v2".to_string()
}

fn default_api_url() -> String {
    "https://google-translator9.p.rapidapi.com/v2/languages".to_string()
}

fn default_max_concurrency() -> usize {
    10
}

fn default_max_input_length() -> usize {
    10_000
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_languages_cache_ttl() -> Duration {
    Duration::from_secs(600)
}
