//! Route definitions for the user profile surface.
//!
//! Mounted at `/users` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST /       -> create_user
/// GET  /{id}   -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{id}", get(users::get_user))
}
