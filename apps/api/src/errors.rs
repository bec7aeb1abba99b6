use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::contact::MessageResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a JSON `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Contact delivery failed: {0:#}")]
    Delivery(anyhow::Error),

    #[error("Resume download failed: {0}")]
    Resume(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) | AppError::Resume(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 5xx causes stay in the server log; clients only get a fixed message.
        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Delivery(e) => {
                tracing::error!("Contact form error: {e:#}");
                "Failed to send message".to_string()
            }
            AppError::Resume(e) => {
                tracing::error!("Resume download error: {e}");
                "Failed to download resume".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        (self.status(), Json(MessageResponse::new(message))).into_response()
    }
}
