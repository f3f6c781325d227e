//! Cryzen Discord embed server.
//!
//! Callers register link preview metadata with `POST /create` and get back a
//! short URL. Visiting `/embed/{id}` serves an HTML page whose Open Graph and
//! Twitter Card tags make chat clients render a styled preview card.
//!
//! Embeds live in an in-memory [`store::EmbedStore`] owned by [`state::AppState`];
//! nothing survives a restart and separate processes never share embeds.

pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod render;
pub mod state;
pub mod store;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Largest accepted `POST /create` body.
pub const MAX_CREATE_BODY_BYTES: usize = 64 * 1024;

/// Build the application router without transport-level middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route(
            "/create",
            post(handlers::embeds::create_embed)
                .layer(DefaultBodyLimit::max(MAX_CREATE_BODY_BYTES)),
        )
        .route("/embed/:id", get(handlers::embeds::view_embed))
        .route("/list", get(handlers::embeds::list_embeds))
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(handlers::openapi_json))
        .with_state(state)
}
