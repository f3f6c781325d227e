// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cryzen_embed_server::{build_router, config::Config, state::AppState};

pub const TEST_HOST: &str = "embeds.test";

/// Fresh state with an empty, unbounded store.
pub fn test_state() -> AppState {
    AppState::new(Config::default())
}

/// Build the full application router around `state`.
///
/// The router is cheap to clone and every clone shares the same store, so a
/// test can create embeds through one clone and read them through another.
pub fn create_test_app(state: AppState) -> Router {
    build_router(state)
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_text(app, uri).await;
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(app, req).await;
    (status, String::from_utf8(bytes).unwrap())
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

// ── Scenario helpers ─────────────────────────────────────────────────────────

/// Create an embed and return the full response body.
pub async fn create_embed(app: Router, body: Value) -> Value {
    let (status, body) = post_json(app, "/create", body).await;
    assert_eq!(status, StatusCode::OK, "setup create_embed failed: {body}");
    body
}

/// Strip the scheme and host from an absolute embed URL.
pub fn path_of(url: &str) -> String {
    let prefix = format!("http://{TEST_HOST}");
    url.strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("unexpected embed url {url}"))
        .to_string()
}

/// `content` attribute of the first `<meta>` whose `attr` equals `key`.
pub fn meta_content(html: &str, attr: &str, key: &str) -> Option<String> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse(&format!(r#"meta[{attr}="{key}"]"#)).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
}
