//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Language, Page, TranslateCommand, Translation, TranslationApi, TranslationError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TranslationApi for NativeClient {
    async fn translate(&self, cmd: TranslateCommand) -> Result<String, TranslationError> {
        self.service.translate(cmd).await
    }

    async fn supported_languages(&self) -> Result<Vec<Language>, TranslationError> {
        self.service.supported_languages().await
    }

    async fn get_translation(&self, id: i64) -> Result<Translation, TranslationError> {
        self.service.get_translation(id).await
    }

    async fn list_translations(
        &self,
        page: Page,
    ) -> Result<(Vec<Translation>, u64), TranslationError> {
        self.service.list_translations(page).await
    }
}
