//! API error type, [`axum::response::IntoResponse`] implementation, and the
//! JSON extractor used by every body-accepting handler.

use axum::{
  extract::{FromRequest, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Error responses carry a structured `{"error": <message>}` body; the
/// `NotFound` message names the id that could not be located. Store errors
/// are never retried; every operation is single-shot.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, axum::Json(json!({ "error": message }))).into_response()
  }
}

// ─── JSON extractor ──────────────────────────────────────────────────────────

/// `axum::Json`, except every body rejection (malformed JSON, unknown
/// property, missing required property, wrong type) surfaces as a 400 rather
/// than axum's default 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl<T: Serialize> IntoResponse for Json<T> {
  fn into_response(self) -> Response { axum::Json(self.0).into_response() }
}
