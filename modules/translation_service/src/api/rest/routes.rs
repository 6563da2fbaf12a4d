//! Route registration

use super::{dto::*, error::Problem, handlers, openapi};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::HeaderMap,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/translate", post(translate_handler))
        .route("/supported-languages", get(supported_languages_handler))
        .route("/translations", get(list_translations_handler))
        .route("/translations/{id}", get(get_translation_handler))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_handler))
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====
// Extractor rejections are turned into problem documents here.

async fn translate_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Result<Json<TranslationRequestDto>, JsonRejection>,
) -> Result<Json<TranslationResponseDto>, Problem> {
    handlers::translate(service, headers, json?).await
}

async fn supported_languages_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<LanguageDto>>, Problem> {
    handlers::supported_languages(service).await
}

async fn list_translations_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListTranslationsQuery>, QueryRejection>,
) -> Result<Json<TranslationsListResponse>, Problem> {
    handlers::list_translations(service, query?).await
}

async fn get_translation_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<TranslationDto>, Problem> {
    handlers::get_translation(service, path?).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::openapi())
}
