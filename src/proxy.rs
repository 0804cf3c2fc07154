//! Same-origin pass-through to the voting backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Backend paths (`/admin/*`,
//! `/voter/*`, `/uploads/*`, `/static/*`) are forwarded verbatim: method,
//! path, query string, `content-type` and body go up; status,
//! `content-type` and body come back.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable backend answers `502 {"error":"Server error"}`, the same
//! shape the backend uses, so client error handling needs no special case.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream. A full registration capture is
/// 30 JPEG data URLs. Enforced by `DefaultBodyLimit` on the proxy routes.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,
    #[error("request body unreadable: {0}")]
    RequestBody(String),
}

impl ProxyError {
    /// Classify a body read failure; only the length limit is "too large".
    pub fn from_body_failure(status: StatusCode, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE { Self::TooLarge } else { Self::RequestBody(detail) }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        Self::from_body_failure(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "Server error"),
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request too large"),
            Self::RequestBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
        };
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Absolute backend URL for an incoming request URI.
pub fn target_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Forward one request to the backend and relay its answer.
///
/// # Errors
///
/// Returns `ProxyError::Upstream` when the backend cannot be reached or the
/// response body cannot be read, `TooLarge` when the incoming body exceeds
/// `MAX_BODY_BYTES`, and `RequestBody` for any other body read failure.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let body = body?;
    let url = target_url(&state.backend_url, &uri);

    let mut upstream = state.http.request(method.clone(), &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        upstream = upstream.header(CONTENT_TYPE, content_type.clone());
    }
    let resp = upstream.send().await?;

    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = resp.bytes().await?;
    tracing::debug!(%method, %url, %status, "proxied");

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    if let Some(content_type) = content_type {
        out.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(out)
}
