use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a store failure for the named operation. Misses stay 404,
    /// everything else becomes a 500 carrying the underlying message.
    pub fn from_store(operation: &str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound("Resume not found".to_string()),
            other => AppError::Internal(format!("{operation}: {other}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_store_miss_maps_to_not_found() {
        let err = AppError::from_store("Failed to fetch resume", StoreError::NotFound("x".into()));
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_store_io_error_passes_message_through() {
        let err = AppError::from_store(
            "Failed to save resume",
            StoreError::Io {
                path: PathBuf::from("saved_resumes/r.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        );
        match err {
            AppError::Internal(msg) => {
                assert!(msg.starts_with("Failed to save resume: "));
                assert!(msg.contains("denied"), "io message must be kept: {msg}");
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::Validation("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = AppError::NotFound("gone".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = AppError::Internal("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
