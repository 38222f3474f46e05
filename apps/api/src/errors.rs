use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// An index or id that does not resolve to a record, or an unknown
    /// resource path. Answered with an empty JSON object.
    #[error("not found")]
    NotFound,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("method not allowed")]
    MethodNotAllowed,
}

/// A type mismatch while building a record surfaces as the deserializer's
/// message in the 400 body.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, Json(json!({}))).into_response()
            }
        }
    }
}
