use axum::{extract::State, response::Html};

use crate::{render::index::index_page, state::AppState};

/// GET /: landing page with the live embed count and API notes.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", content_type = "text/html", body = String))
)]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let active = state.store.len().await;
    Html(index_page(active).into_string())
}
