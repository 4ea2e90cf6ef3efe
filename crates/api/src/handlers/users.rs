//! Handlers for the minimal user profile surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ladle_core::recipe::NewUser;
use ladle_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::UserView;

/// POST /users
///
/// Create a user profile.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.catalog().create_user(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserView::from(&user),
        }),
    ))
}

/// GET /users/{id}
///
/// Fetch a user profile including their favorite recipe ids.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state.catalog().get_user(id).await?;
    Ok(Json(DataResponse {
        data: UserView::from(&user),
    }))
}
