//! Handlers for the recipe catalog and its engagement operations.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use ladle_core::recipe::{NewRecipe, Recipe, User};
use ladle_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::RecipeListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::views::{CommentView, RecipeDetail, RecipeSummary, UserView};

/// Body for `POST /recipes/{id}/rating`.
#[derive(Debug, Deserialize)]
pub struct RatingPayload {
    pub value: u8,
}

/// Body for `POST /recipes/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub text: String,
}

/// GET /recipes?cuisine=&diet=&difficulty=&q=&max_prep_time=&...&page=&page_size=
///
/// Filtered, paginated listing ordered by creation time, newest first.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .catalog()
        .search(&params.filter(), params.page_request())
        .await?;

    let data: Vec<RecipeSummary> = page.items.iter().map(RecipeSummary::from).collect();
    Ok(Json(PageResponse {
        data,
        page: page.info,
    }))
}

/// GET /recipes/popular
///
/// Top recipes by current average rating. Fixed-size slice, no pagination.
pub async fn popular_recipes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = state.catalog().popular().await?;
    let data: Vec<RecipeSummary> = recipes.iter().map(RecipeSummary::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /recipes/{id}
///
/// Full recipe detail with derived values recomputed and author/commenter
/// profiles resolved.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = state.catalog().get_recipe(id).await?;
    let detail = resolve_detail(&state, &recipe).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /recipes
///
/// Create a recipe owned by the authenticated user.
pub async fn create_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewRecipe>,
) -> AppResult<impl IntoResponse> {
    let recipe = state.catalog().create_recipe(auth.user_id, input).await?;
    let detail = resolve_detail(&state, &recipe).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// POST /recipes/{id}/rating
///
/// Upsert the authenticated user's rating of a recipe.
pub async fn rate_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<RatingPayload>,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .engagement()
        .rate(id, auth.user_id, payload.value)
        .await?;
    Ok(Json(DataResponse {
        data: RecipeSummary::from(&recipe),
    }))
}

/// POST /recipes/{id}/comments
///
/// Append a comment and return the new entry with the commenter's profile
/// resolved.
pub async fn comment_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<CommentPayload>,
) -> AppResult<impl IntoResponse> {
    let comment = state
        .engagement()
        .comment(id, auth.user_id, &payload.text)
        .await?;
    let user = state.catalog().get_user(auth.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CommentView::new(&comment, &user),
        }),
    ))
}

/// PUT /recipes/{id}/favorite
///
/// Add the recipe to the authenticated user's favorites. Re-favoriting is
/// rejected, not silently ignored.
pub async fn favorite_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state.engagement().favorite(auth.user_id, id).await?;
    Ok(Json(DataResponse {
        data: UserView::from(&user),
    }))
}

/// DELETE /recipes/{id}/favorite
///
/// Remove the recipe from the authenticated user's favorites; removing a
/// non-member is a no-op.
pub async fn unfavorite_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state.engagement().unfavorite(auth.user_id, id).await?;
    Ok(Json(DataResponse {
        data: UserView::from(&user),
    }))
}

/// Resolve the author and commenter profiles for a recipe detail view.
///
/// Profiles are fetched once per distinct user and joined in memory.
async fn resolve_detail(state: &AppState, recipe: &Recipe) -> AppResult<RecipeDetail> {
    let catalog = state.catalog();
    let author = catalog.get_user(recipe.author_id).await?;

    let mut profiles: HashMap<DbId, User> = HashMap::new();
    profiles.insert(author.id, author.clone());

    let mut comments = Vec::with_capacity(recipe.comments.len());
    for comment in &recipe.comments {
        if !profiles.contains_key(&comment.user_id) {
            let user = catalog.get_user(comment.user_id).await?;
            profiles.insert(comment.user_id, user);
        }
        comments.push(CommentView::new(comment, &profiles[&comment.user_id]));
    }

    Ok(RecipeDetail {
        summary: RecipeSummary::from(recipe),
        author: (&author).into(),
        ingredients: recipe.ingredients.clone(),
        instructions: recipe.instructions.clone(),
        comments,
        updated_at: recipe.updated_at,
    })
}
