pub mod health;
pub mod recipes;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                      list (GET), create (POST)
/// /recipes/popular              top-rated slice (GET)
/// /recipes/{id}                 detail (GET)
/// /recipes/{id}/rating          rate (POST)
/// /recipes/{id}/comments        comment (POST)
/// /recipes/{id}/favorite        favorite (PUT), unfavorite (DELETE)
///
/// /users                        create (POST)
/// /users/{id}                   profile (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipes::router())
        .nest("/users", users::router())
}
