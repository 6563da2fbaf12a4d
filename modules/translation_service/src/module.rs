//! Module wiring: builds the service graph and exposes its surfaces

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::TranslationApi;
use crate::domain::{Service, TranslationProvider, TranslationRepository};
use crate::infra::storage::{migrations::Migrator, SeaOrmTranslationRepository};
use crate::infra::upstream::RapidApiTranslator;
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Translation service module
pub struct TranslationServiceModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl TranslationServiceModule {
    /// Build the module against the RapidAPI upstream
    pub fn init(config: &Config, db: DatabaseConnection) -> Result<Self> {
        config.validate()?;
        let provider = Arc::new(RapidApiTranslator::new(config)?);
        let module = Self::with_provider(config, db, provider);
        tracing::info!(
            translate_url = %config.translate_url,
            max_concurrency = config.max_concurrency,
            "Translation service initialized"
        );
        Ok(module)
    }

    /// Build the module with a caller-supplied upstream
    pub fn with_provider(
        config: &Config,
        db: DatabaseConnection,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        let db = Arc::new(db);
        let repository: Arc<dyn TranslationRepository> =
            Arc::new(SeaOrmTranslationRepository::new(db.clone()));
        let service = Arc::new(Service::new(provider, repository, config.service_options()));
        Self { db, service }
    }

    /// Apply pending database migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Translation service migrations completed");
        Ok(())
    }

    /// REST routes of this module
    pub fn router(&self) -> axum::Router {
        crate::api::rest::routes::register_routes(axum::Router::new(), self.service.clone())
    }

    /// OpenAPI document of the REST routes
    pub fn openapi() -> utoipa::openapi::OpenApi {
        crate::api::rest::openapi::openapi()
    }

    /// In-process client
    pub fn client(&self) -> Arc<dyn TranslationApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }
}
