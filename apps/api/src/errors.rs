use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::puzzle::generator::PuzzleError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Puzzle unavailable: {0}")]
    PuzzleUnavailable(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<PuzzleError> for AppError {
    fn from(err: PuzzleError) -> Self {
        match &err {
            PuzzleError::SourceExhausted { .. } => AppError::PuzzleUnavailable(err.to_string()),
            PuzzleError::Source(e) => AppError::Llm(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PuzzleUnavailable(msg) => {
                tracing::warn!("Puzzle unavailable: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "PUZZLE_UNAVAILABLE",
                    "Could not generate the word search".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
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
    use crate::llm_client::LlmError;

    #[test]
    fn test_source_exhausted_maps_to_bad_request() {
        let err: AppError = PuzzleError::SourceExhausted {
            topic: "void".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::PuzzleUnavailable(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_source_failure_maps_to_server_error() {
        let err: AppError = PuzzleError::Source(LlmError::EmptyContent).into();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("topic cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
