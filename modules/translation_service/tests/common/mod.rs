//! Shared mocks and fixtures for translation service tests
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;
use translation_service::contract::{Language, NewTranslation, Translation, TranslationError};
use translation_service::domain::{RetryPolicy, ServiceOptions, TranslationProvider, TranslationRepository};

/// Languages offered by the mock upstream
pub fn test_languages() -> Vec<Language> {
    vec![
        Language::new("ru", "Russian"),
        Language::new("en", "English"),
        Language::new("es", "Spanish"),
    ]
}

/// Options without retry delays
pub fn fast_options() -> ServiceOptions {
    ServiceOptions {
        retry: RetryPolicy {
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            ..RetryPolicy::default()
        },
        ..ServiceOptions::default()
    }
}

/// In-memory SQLite database, a single connection so the schema survives
pub async fn sqlite_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

/// Dictionary-backed upstream
pub struct MockProvider {
    languages: Vec<Language>,
    dictionary: HashMap<String, String>,
    failing_words: HashSet<String>,
    languages_failures_left: AtomicU32,
    pub languages_calls: AtomicU32,
    pub word_calls: RwLock<Vec<String>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    word_delay: Duration,
}

impl MockProvider {
    pub fn new() -> Self {
        let dictionary = [
            ("Hello", "Привет"),
            ("world", "мир"),
            ("Soy", "Am"),
            ("un", "a"),
            ("programador", "programmer"),
            ("principiante", "beginner"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            languages: test_languages(),
            dictionary,
            failing_words: HashSet::new(),
            languages_failures_left: AtomicU32::new(0),
            languages_calls: AtomicU32::new(0),
            word_calls: RwLock::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            word_delay: Duration::ZERO,
        }
    }

    /// First `n` language lookups fail with a transient error
    pub fn with_languages_failures(self, n: u32) -> Self {
        self.languages_failures_left.store(n, Ordering::SeqCst);
        self
    }

    /// Translating `word` fails with a permanent upstream error
    pub fn with_failing_word(mut self, word: &str) -> Self {
        self.failing_words.insert(word.to_string());
        self
    }

    /// Each word translation takes this long
    pub fn with_word_delay(mut self, delay: Duration) -> Self {
        self.word_delay = delay;
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError> {
        self.languages_calls.fetch_add(1, Ordering::SeqCst);
        let left = self.languages_failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.languages_failures_left.store(left - 1, Ordering::SeqCst);
            return Err(TranslationError::upstream_access("connection reset"));
        }
        Ok(self.languages.clone())
    }

    async fn translate_word(
        &self,
        word: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        self.word_calls.write().push(word.to_string());
        if self.failing_words.contains(word) {
            return Err(TranslationError::UpstreamStatus {
                status: 403,
                message: "not subscribed".into(),
            });
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.word_delay.is_zero() {
            tokio::time::sleep(self.word_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        Ok(self
            .dictionary
            .get(word)
            .cloned()
            .unwrap_or_else(|| word.to_uppercase()))
    }
}

/// In-memory translation history
#[derive(Default)]
pub struct MockRepo {
    data: RwLock<Vec<Translation>>,
    pub fail_saves: bool,
}

impl MockRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
            fail_saves: true,
        }
    }

    pub fn stored(&self) -> Vec<Translation> {
        self.data.read().clone()
    }
}

#[async_trait]
impl TranslationRepository for MockRepo {
    async fn save(&self, translation: &NewTranslation) -> anyhow::Result<Translation> {
        if self.fail_saves {
            anyhow::bail!("database is down");
        }
        let mut data = self.data.write();
        let record = Translation {
            id: data.len() as i64 + 1,
            ip_address: translation.ip_address.clone(),
            input_text: translation.input_text.clone(),
            translated_text: translation.translated_text.clone(),
            created_at: chrono::Utc::now(),
        };
        data.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Translation>> {
        Ok(self.data.read().iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Translation>> {
        Ok(self
            .data
            .read()
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().len() as u64)
    }
}
