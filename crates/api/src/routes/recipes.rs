//! Route definitions for the recipe catalog.
//!
//! Mounted at `/recipes` by `api_routes()`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Recipe routes.
///
/// ```text
/// GET    /                 -> list_recipes (?cuisine, diet, difficulty, q,
///                             max_prep_time, max_cook_time, max_calories,
///                             ingredients, page, page_size)
/// POST   /                 -> create_recipe
/// GET    /popular          -> popular_recipes
/// GET    /{id}             -> get_recipe
/// POST   /{id}/rating      -> rate_recipe
/// POST   /{id}/comments    -> comment_recipe
/// PUT    /{id}/favorite    -> favorite_recipe
/// DELETE /{id}/favorite    -> unfavorite_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/popular", get(recipes::popular_recipes))
        .route("/{id}", get(recipes::get_recipe))
        .route("/{id}/rating", post(recipes::rate_recipe))
        .route("/{id}/comments", post(recipes::comment_recipe))
        .route(
            "/{id}/favorite",
            put(recipes::favorite_recipe).delete(recipes::unfavorite_recipe),
        )
}
