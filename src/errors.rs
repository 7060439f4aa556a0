use crate::models::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;

#[derive(Debug)]
pub enum AppError {
    Validation(BTreeMap<String, Vec<String>>),
    Conflict(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self::Validation(errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::invalid("The given data is invalid.", errors),
            ),
            AppError::Conflict(message) => (StatusCode::CONFLICT, ApiResponse::failed(message)),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ApiResponse::failed(message)),
            AppError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::failed(message))
            }
        };
        (status, Json(body)).into_response()
    }
}
