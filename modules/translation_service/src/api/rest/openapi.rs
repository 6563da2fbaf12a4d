//! OpenAPI document for the REST surface

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Translator API",
        description = "Word-by-word text translation backed by the Google Translate API"
    ),
    paths(
        handlers::translate,
        handlers::supported_languages,
        handlers::list_translations,
        handlers::get_translation,
        handlers::health,
    ),
    components(schemas(
        TranslationRequestDto,
        TranslationResponseDto,
        LanguageDto,
        TranslationDto,
        TranslationsListResponse,
        HealthResponse,
        Problem,
    )),
    tags(
        (name = "translation", description = "Text translation"),
        (name = "history", description = "Stored translations"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
