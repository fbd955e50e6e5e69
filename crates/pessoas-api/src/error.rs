//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
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

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("internal error: {0}")]
  Internal(#[source] pessoas_core::Error),
}

impl ApiError {
  pub fn pessoa_not_found() -> Self { Self::NotFound("Pessoa não encontrada".into()) }
}

impl From<pessoas_core::Error> for ApiError {
  fn from(e: pessoas_core::Error) -> Self {
    use pessoas_core::Error as E;
    match e {
      E::Validation { .. } => ApiError::BadRequest(e.to_string()),
      E::ApelidoTaken(_) => {
        ApiError::Conflict("Já existe uma pessoa com esse apelido".into())
      }
      E::NotFound(_) => ApiError::pessoa_not_found(),
      other => ApiError::Internal(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
