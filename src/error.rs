use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type
///
/// Display output is the raw collaborator message; it is echoed to clients
/// verbatim as `Error: {message}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Cache(#[from] redis::RedisError),

    #[error("duplicate key value violates unique constraint on username \"{0}\"")]
    UserAlreadyExists(String),
}

/// Every failure surfaces as a 500 with a plain-text body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Cache(ref e) => tracing::error!("Cache error: {:?}", e),
            AppError::UserAlreadyExists(ref username) => {
                tracing::warn!("Duplicate signup for {}", username)
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self),
        )
            .into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
