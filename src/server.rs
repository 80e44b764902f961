use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::proxy;
use crate::translate::completion_types::CompletionRequest;
use crate::translate::request::completion_to_chat;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub client: reqwest::Client,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/completions", post(handle_completions))
        .route("/health", get(handle_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_completions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Parse the legacy request. A missing or non-string prompt is a decode
    // failure like any other malformed body; no outbound call happens.
    let legacy: CompletionRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to parse request: {e}");
            return error_response(&ProxyError::decode(format!("Invalid request body: {e}")));
        }
    };

    let chat_req = completion_to_chat(&legacy);
    let authorization = forwardable_authorization(&headers);

    match proxy::forward(&chat_req, authorization.as_ref(), &state.config, &state.client).await {
        Ok((status, resp_body)) => relay_response(status, resp_body),
        Err(e) => {
            warn!("Proxy error: {e}");
            error_response(&e)
        }
    }
}

/// Relay the upstream status and body unchanged, always as JSON.
fn relay_response(status: u16, body: Bytes) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Proxy-originated errors get a plain-text body and a status from the
/// error taxonomy. Upstream-originated errors never pass through here.
fn error_response(err: &ProxyError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string()).into_response()
}

/// First `Authorization` value from the inbound request, converted for the
/// outbound client. Copied byte-for-byte.
fn forwardable_authorization(headers: &HeaderMap) -> Option<reqwest::header::HeaderValue> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| reqwest::header::HeaderValue::from_bytes(v.as_bytes()).ok())
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
