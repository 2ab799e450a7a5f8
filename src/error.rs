use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid API key")]
    Unauthorized,

    #[error("{0}")]
    ValidationError(String),

    #[error("Error uploading file: {0}")]
    UploadError(String),

    #[error("Error checking keyword in PDF: {0}")]
    ExtractionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid API key.".to_string(),
                None,
            ),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::UploadError(msg) => (
                StatusCode::BAD_REQUEST,
                "Error uploading file.".to_string(),
                Some(msg),
            ),
            AppError::ExtractionError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
                Some(msg),
            ),
            AppError::ConfigError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
                Some(msg),
            ),
            AppError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
                Some(msg),
            ),
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            error: detail,
        });

        (status, body).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::UploadError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
