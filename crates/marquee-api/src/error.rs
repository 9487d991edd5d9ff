//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use marquee_core::Error as DomainError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// A store failure on a read path.
  #[error("store error: {0}")]
  Store(#[source] DomainError),

  /// A failed mutation: carries the flashed message alongside the domain
  /// error that caused it.
  #[error("{message}")]
  Failed {
    message: String,
    #[source]
    source:  DomainError,
  },
}

impl ApiError {
  /// Wrap a mutation failure, keeping the flashed-message contract:
  /// `message` names the entity and the action that failed.
  pub fn failed(message: impl Into<String>, source: DomainError) -> Self {
    Self::Failed {
      message: message.into(),
      source,
    }
  }
}

fn domain_status(e: &DomainError) -> StatusCode {
  match e {
    DomainError::VenueNotFound(_)
    | DomainError::ArtistNotFound(_)
    | DomainError::ShowNotFound(_) => StatusCode::NOT_FOUND,
    DomainError::MissingField { .. } | DomainError::InvalidField { .. } => {
      StatusCode::BAD_REQUEST
    }
    DomainError::Constraint(_) | DomainError::DateParse(_) => {
      StatusCode::INTERNAL_SERVER_ERROR
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Store(e) => (
        domain_status(&e),
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
      ApiError::Failed { message, source } => {
        tracing::warn!(error = %source, "{message}");
        (
          domain_status(&source),
          Json(json!({ "message": message, "detail": source.to_string() })),
        )
          .into_response()
      }
    }
  }
}
