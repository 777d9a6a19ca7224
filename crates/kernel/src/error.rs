//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use vetrina_sdk::BlockError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("block render failed")]
    Block(#[from] BlockError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Error details go to the log, not the response body
        match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
            }
            AppError::Block(e) => {
                tracing::error!(error = %e, "content block render failed");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
