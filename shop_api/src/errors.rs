// shop_api/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed path, query or body, or a value outside its allowed range.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// The target exists but can no longer be modified (a soft-deleted item).
  #[error("Not Modified: {0}")]
  NotModified(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::CartNotFound(_) | StoreError::ItemNotFound(_) => AppError::NotFound(err.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::NotModified(_) => StatusCode::NOT_MODIFIED,
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Config(_) | AppError::Internal(_) => tracing::error!(application_error = %self, "Responding with error"),
      _ => tracing::warn!(application_error = %self, "Responding with error"),
    }
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => HttpResponse::build(self.status_code()).json(json!({"error": m})),
      // 304 carries no body
      AppError::NotModified(_) => HttpResponse::NotModified().finish(),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_errors_become_not_found() {
    let err = AppError::from(StoreError::ItemNotFound(7));
    assert!(matches!(err, AppError::NotFound(ref m) if m.contains('7')));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn validation_maps_to_unprocessable_entity() {
    let err = AppError::Validation("limit must be greater than 0".to_string());
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
  }
}
