use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ladle_core::error::CatalogError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CatalogError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ladle_core`.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or malformed identity on a call that requires one.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Catalog(catalog) => match catalog {
                CatalogError::RecipeNotFound { .. } | CatalogError::UserNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
                }
                CatalogError::InvalidRating(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_RATING", self.to_string())
                }
                CatalogError::AlreadyFavorited { .. } => (
                    StatusCode::BAD_REQUEST,
                    "ALREADY_FAVORITED",
                    self.to_string(),
                ),
                CatalogError::EmptyIngredients
                | CatalogError::EmptyInstructions
                | CatalogError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    self.to_string(),
                ),
                CatalogError::WriteConflict { .. } => {
                    tracing::warn!(error = %catalog, "Write retries exhausted");
                    (StatusCode::CONFLICT, "WRITE_CONFLICT", self.to_string())
                }
                CatalogError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal catalog error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
