use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// `EmptyInput` is detected before any backend call is made; `Generation`
/// carries the backend's own error unchanged. Neither is fatal to the
/// service — the session handle stays usable after a failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} must not be blank")]
    EmptyInput(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyInput(_) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", self.to_string()),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "The generation backend failed to produce a result".to_string(),
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
