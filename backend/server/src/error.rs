use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors are surfaced to clients as opaque human-readable messages; no
/// structured error codes exist on this surface.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Unknown listing")]
    UnknownListing,

    #[error("Unknown order")]
    UnknownOrder,

    #[error("Invalid payment signature")]
    InvalidSignature,

    #[error("Database error: {0}")]
    Database(#[from] redis::RedisError),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::InvalidSignature => StatusCode::BAD_REQUEST,
            AppError::UnknownListing | AppError::UnknownOrder => StatusCode::NOT_FOUND,
            AppError::Database { .. } | AppError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
