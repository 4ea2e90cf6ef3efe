//! Authenticated-identity extractor for Axum handlers.
//!
//! Authentication itself is an upstream concern: the identity collaborator
//! in front of this service verifies credentials and forwards the
//! authenticated user id in the `x-user-id` header. This extractor trusts
//! that header and performs no credential checks of its own.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use ladle_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated user extracted from the `x-user-id` header.
///
/// Use this as an extractor parameter in any handler that requires an
/// acting identity:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(format!("Missing {USER_ID_HEADER} header")))?;

        let user_id: DbId = header
            .parse()
            .map_err(|_| AppError::Unauthorized(format!("Invalid {USER_ID_HEADER} header")))?;

        Ok(AuthUser { user_id })
    }
}
