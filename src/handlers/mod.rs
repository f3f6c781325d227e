pub mod embeds;
pub mod home;

use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    CreateEmbedRequest, CreateEmbedResponse, EmbedListResponse, EmbedSummary, ErrorResponse,
    HealthResponse,
};

pub const SERVICE_NAME: &str = "Cryzen Discord Embed Server";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cryzen Discord Embed Server",
        description = "Register link preview metadata and serve Open Graph embed pages."
    ),
    paths(
        home::index,
        embeds::create_embed,
        embeds::view_embed,
        embeds::list_embeds,
        health_check,
    ),
    components(schemas(
        CreateEmbedRequest,
        CreateEmbedResponse,
        EmbedSummary,
        EmbedListResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// GET /health: liveness check. Independent of store contents.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
    })
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
