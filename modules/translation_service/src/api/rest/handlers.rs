//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::{map_domain_error, Problem}};
use crate::domain::{validation::client_ip, Service};
use axum::{
    extract::{Path, Query},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

/// Header carrying the originating client address
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Translate a text word by word
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translation",
    request_body = TranslationRequestDto,
    params(("X-Forwarded-For" = Option<String>, Header, description = "Client address, defaults to 127.0.0.1")),
    responses(
        (status = 200, description = "Translated text", body = TranslationResponseDto),
        (status = 400, description = "Invalid input, unknown language or upstream failure", body = Problem),
        (status = 502, description = "Upstream server error", body = Problem)
    )
)]
pub async fn translate(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<TranslationRequestDto>,
) -> Result<Json<TranslationResponseDto>, Problem> {
    let forwarded_for = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok());
    let translated_text = service
        .translate(req.into_command(client_ip(forwarded_for)))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TranslationResponseDto { translated_text }))
}

/// List languages supported by the upstream
#[utoipa::path(
    get,
    path = "/supported-languages",
    tag = "translation",
    responses(
        (status = 200, description = "Supported languages", body = Vec<LanguageDto>),
        (status = 502, description = "Upstream server error", body = Problem)
    )
)]
pub async fn supported_languages(service: Arc<Service>) -> Result<Json<Vec<LanguageDto>>, Problem> {
    let languages = service
        .supported_languages()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(languages.into_iter().map(Into::into).collect()))
}

/// List stored translations, newest first
#[utoipa::path(
    get,
    path = "/translations",
    tag = "history",
    params(ListTranslationsQuery),
    responses(
        (status = 200, description = "Stored translations", body = TranslationsListResponse)
    )
)]
pub async fn list_translations(
    service: Arc<Service>,
    Query(query): Query<ListTranslationsQuery>,
) -> Result<Json<TranslationsListResponse>, Problem> {
    let (translations, total) = service
        .list_translations(query.into())
        .await
        .map_err(map_domain_error)?;

    let items = translations.into_iter().map(Into::into).collect();
    Ok(Json(TranslationsListResponse { items, total }))
}

/// Get a stored translation
#[utoipa::path(
    get,
    path = "/translations/{id}",
    tag = "history",
    params(("id" = i64, Path, description = "Translation id")),
    responses(
        (status = 200, description = "Stored translation", body = TranslationDto),
        (status = 404, description = "No translation with this id", body = Problem)
    )
)]
pub async fn get_translation(
    service: Arc<Service>,
    Path(id): Path<i64>,
) -> Result<Json<TranslationDto>, Problem> {
    let translation = service.get_translation(id).await.map_err(map_domain_error)?;
    Ok(Json(translation.into()))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
