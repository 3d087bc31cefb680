//! Error types for Smart Tour server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{analytics::AnalyticsError, chatbot::ChatbotError};

/// Application error codes reported in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    NoSuchData = 3,
    ZeroBaseline = 4,
    EmptyWindow = 5,
    MissingTranslation = 6,
    StorageFailure = 7,
    NonFinite = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Chatbot(#[from] ChatbotError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
            AppError::Analytics(e @ AnalyticsError::ZeroBaseline) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::ZeroBaseline, e.to_string())
            }
            AppError::Analytics(e @ AnalyticsError::EmptyWindow(_)) => {
                (StatusCode::BAD_REQUEST, ErrorCode::EmptyWindow, e.to_string())
            }
            AppError::Analytics(e @ AnalyticsError::NonFinite(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NonFinite, e.to_string())
            }
            AppError::Chatbot(e @ ChatbotError::MissingTranslation { .. }) => {
                tracing::error!("Response table incomplete: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::MissingTranslation,
                    e.to_string(),
                )
            }
            AppError::Chatbot(e) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, e.to_string()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageFailure,
                    "Storage error".to_string(),
                )
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageFailure,
                    "Serialization error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
