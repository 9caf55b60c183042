//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as `{"error": <kind>, "detail": <message>}`.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The external search call failed; no partial results are returned.
  #[error("search provider error: {0}")]
  SearchProvider(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<outreach_core::Error> for ApiError {
  fn from(e: outreach_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(e: JsonRejection) -> Self { ApiError::BadRequest(e.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, kind, detail) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "bad request", m.clone()),
      ApiError::SearchProvider(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, "search provider error", e.to_string())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, "store error", e.to_string()),
    };
    if status.is_server_error() {
      tracing::error!(%detail, "{kind}");
    }
    (status, Json(json!({ "error": kind, "detail": detail }))).into_response()
  }
}
