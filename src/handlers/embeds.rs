use axum::{
    extract::{rejection::BytesRejection, Host, Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use bytes::Bytes;
use chrono::Local;
use tracing::{info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        CreateEmbedRequest, CreateEmbedResponse, EmbedListResponse, EmbedSummary, ErrorResponse,
    },
    render,
    state::AppState,
};

/// Fresh ids tried before giving up on a create request.
const MAX_ID_ATTEMPTS: usize = 5;

// ============================================================================
// Helpers
// ============================================================================

/// `<scheme>://<host>` as seen by the caller, so created links resolve no
/// matter which address the service was reached through.
pub fn request_base_url(headers: &HeaderMap, host: Option<&str>, config: &Config) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| matches!(*s, "http" | "https"))
        .unwrap_or("http");

    let host = match host {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => config.server_addr(),
    };

    format!("{scheme}://{host}")
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /create: register a new embed and return its short URL.
#[utoipa::path(
    post,
    path = "/create",
    request_body = CreateEmbedRequest,
    responses(
        (status = 200, description = "Embed created", body = CreateEmbedResponse),
        (status = 400, description = "Missing or invalid JSON body", body = ErrorResponse),
        (status = 413, description = "Body over the size limit", body = ErrorResponse),
        (status = 500, description = "Internal failure", body = ErrorResponse),
    )
)]
pub async fn create_embed(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<CreateEmbedResponse>> {
    let body = body?;
    let req = CreateEmbedRequest::from_body(&body)?;
    let base_url = request_base_url(&headers, host.as_ref().map(|h| h.0.as_str()), &state.config);

    for _ in 0..MAX_ID_ATTEMPTS {
        let embed_id = (state.id_source)();
        let url = format!("{base_url}/embed/{embed_id}");
        let record = req.clone().into_record(embed_id, url, Local::now());

        match state.store.insert(record).await {
            Ok(record) => {
                info!(embed_id = %record.id, title = %record.title, "Embed created");
                return Ok(Json(CreateEmbedResponse {
                    success: true,
                    embed_id: record.id.clone(),
                    url: record.url.clone(),
                    message: "Embed created successfully".into(),
                }));
            }
            Err(AppError::Conflict(msg)) => {
                warn!("Embed id collision, retrying: {}", msg);
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Internal(
        "Could not allocate a unique embed id".into(),
    ))
}

/// GET /embed/:id: the page link unfurlers scrape.
#[utoipa::path(
    get,
    path = "/embed/{id}",
    params(("id" = String, Path, description = "Embed identifier")),
    responses(
        (status = 200, description = "Embed page", content_type = "text/html", body = String),
        (status = 404, description = "Embed not found", content_type = "text/plain", body = String),
    )
)]
pub async fn view_embed(
    State(state): State<AppState>,
    Path(embed_id): Path<String>,
) -> AppResult<Html<String>> {
    let record = state
        .store
        .get(&embed_id)
        .await
        .ok_or_else(|| AppError::NotFound("Embed not found".into()))?;

    Ok(Html(render::embed_page(&record).into_string()))
}

/// GET /list: every active embed, oldest first.
#[utoipa::path(
    get,
    path = "/list",
    responses((status = 200, description = "Active embeds", body = EmbedListResponse))
)]
pub async fn list_embeds(State(state): State<AppState>) -> Json<EmbedListResponse> {
    let embeds: Vec<EmbedSummary> = state
        .store
        .all()
        .await
        .iter()
        .map(|record| EmbedSummary::from(record.as_ref()))
        .collect();

    Json(EmbedListResponse {
        count: embeds.len(),
        embeds,
    })
}
