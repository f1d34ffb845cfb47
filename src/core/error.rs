use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid geometry: {0}")]
    Geometry(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// A downstream failure reported to the client under a fixed message.
    #[error("{message}: {source}")]
    Downstream {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Replace the client-facing message of a server-side failure.
    ///
    /// Client errors keep their own message.
    pub fn reported_as(self, message: &'static str) -> Self {
        match self {
            AppError::BadRequest(_) | AppError::Downstream { .. } => self,
            other => AppError::Downstream {
                message,
                source: Box::new(other),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Lookups of unknown codes are reported like any other downstream failure
            AppError::NotFound(_)
            | AppError::Database(_)
            | AppError::Geometry(_)
            | AppError::Internal(_)
            | AppError::Downstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Downstream {
                message,
                ref source,
            } => {
                match source.as_ref() {
                    AppError::NotFound(detail) => tracing::warn!("{}: {}", message, detail),
                    other => tracing::error!("{}: {:?}", message, other),
                }
                message.to_string()
            }
            other => {
                tracing::error!("Unhandled error: {:?}", other);
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
