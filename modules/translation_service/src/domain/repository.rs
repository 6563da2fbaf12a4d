//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewTranslation, Translation};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for completed translations
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Insert a translation and return it with its id and creation time
    async fn save(&self, translation: &NewTranslation) -> Result<Translation>;

    /// Find a translation by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Translation>>;

    /// List translations, newest first
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Translation>>;

    /// Count all stored translations
    async fn count(&self) -> Result<u64>;
}
