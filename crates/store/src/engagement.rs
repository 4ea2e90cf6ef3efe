//! Rate / comment / favorite mutations.
//!
//! Every mutation runs a fetch, mutate-copy, compare-and-swap cycle against
//! one record. A concurrent commit on the same record invalidates the
//! snapshot and the cycle restarts; the retry budget bounds how long a
//! writer can chase a hot record before [`CatalogError::WriteConflict`] is
//! surfaced. Each mutation either fully applies or fully fails.

use std::sync::Arc;

use chrono::Utc;

use ladle_core::error::CatalogError;
use ladle_core::recipe::{Comment, Rating, Recipe, User};
use ladle_core::types::DbId;
use ladle_core::validation::{validate_comment_text, validate_rating};

use crate::store::{CasOutcome, RecipeStore, UserStore};

/// Maximum fetch-swap cycles before a mutation gives up.
///
/// A failed swap means some other writer committed, so every retry implies
/// system-wide progress; the budget is only exhausted when a record is
/// contended by more concurrent writers than this.
pub const MAX_WRITE_ATTEMPTS: u32 = 64;

/// Owns the engagement mutations and their uniqueness / idempotence rules.
pub struct EngagementManager<S> {
    store: Arc<S>,
}

impl<S> EngagementManager<S>
where
    S: RecipeStore + UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record `user_id`'s rating of a recipe.
    ///
    /// An existing entry for the user is overwritten in place; otherwise a
    /// new entry is appended. Calling this N times with different values
    /// leaves exactly one entry holding the most recent value.
    pub async fn rate(
        &self,
        recipe_id: DbId,
        user_id: DbId,
        value: u8,
    ) -> Result<Recipe, CatalogError> {
        validate_rating(value)?;

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let snapshot = self
                .store
                .fetch_recipe(recipe_id)
                .await?
                .ok_or(CatalogError::RecipeNotFound { id: recipe_id })?;
            let mut recipe = snapshot.record;

            match recipe.ratings.iter_mut().find(|r| r.user_id == user_id) {
                Some(existing) => existing.value = value,
                None => recipe.ratings.push(Rating {
                    user_id,
                    value,
                    created_at: Utc::now(),
                }),
            }

            match self
                .store
                .swap_recipe(snapshot.version, recipe.clone())
                .await?
            {
                CasOutcome::Committed => {
                    tracing::info!(recipe_id, user_id, value, "Rating recorded");
                    return Ok(recipe);
                }
                CasOutcome::Stale => continue,
            }
        }

        Err(CatalogError::WriteConflict {
            id: recipe_id,
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }

    /// Append a comment to a recipe and return the new entry.
    ///
    /// Comments are append-only: no deduplication, no edit, no delete. The
    /// commenter must resolve before the recipe is touched, so a comment is
    /// never persisted under a user id that profile resolution cannot join.
    pub async fn comment(
        &self,
        recipe_id: DbId,
        user_id: DbId,
        text: &str,
    ) -> Result<Comment, CatalogError> {
        validate_comment_text(text)?;

        if self.store.fetch_user(user_id).await?.is_none() {
            return Err(CatalogError::UserNotFound { id: user_id });
        }

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let snapshot = self
                .store
                .fetch_recipe(recipe_id)
                .await?
                .ok_or(CatalogError::RecipeNotFound { id: recipe_id })?;
            let mut recipe = snapshot.record;

            let comment = Comment {
                user_id,
                text: text.to_string(),
                created_at: Utc::now(),
            };
            recipe.comments.push(comment.clone());

            match self.store.swap_recipe(snapshot.version, recipe).await? {
                CasOutcome::Committed => {
                    tracing::info!(recipe_id, user_id, "Comment added");
                    return Ok(comment);
                }
                CasOutcome::Stale => continue,
            }
        }

        Err(CatalogError::WriteConflict {
            id: recipe_id,
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }

    /// Add a recipe to a user's favorites.
    ///
    /// The recipe must resolve before the user record is touched. Adding a
    /// recipe that is already a favorite is rejected with
    /// [`CatalogError::AlreadyFavorited`], not treated as a silent no-op.
    pub async fn favorite(&self, user_id: DbId, recipe_id: DbId) -> Result<User, CatalogError> {
        if self.store.fetch_recipe(recipe_id).await?.is_none() {
            return Err(CatalogError::RecipeNotFound { id: recipe_id });
        }

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let snapshot = self
                .store
                .fetch_user(user_id)
                .await?
                .ok_or(CatalogError::UserNotFound { id: user_id })?;
            let mut user = snapshot.record;

            if user.favorite_recipes.contains(&recipe_id) {
                return Err(CatalogError::AlreadyFavorited { user_id, recipe_id });
            }
            user.favorite_recipes.push(recipe_id);

            match self.store.swap_user(snapshot.version, user.clone()).await? {
                CasOutcome::Committed => {
                    tracing::info!(user_id, recipe_id, "Recipe favorited");
                    return Ok(user);
                }
                CasOutcome::Stale => continue,
            }
        }

        Err(CatalogError::WriteConflict {
            id: user_id,
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }

    /// Remove a recipe from a user's favorites.
    ///
    /// Removing a non-member is a silent no-op, and the recipe is not
    /// required to still resolve on this path.
    pub async fn unfavorite(&self, user_id: DbId, recipe_id: DbId) -> Result<User, CatalogError> {
        for _ in 0..MAX_WRITE_ATTEMPTS {
            let snapshot = self
                .store
                .fetch_user(user_id)
                .await?
                .ok_or(CatalogError::UserNotFound { id: user_id })?;
            let mut user = snapshot.record;

            if !user.favorite_recipes.contains(&recipe_id) {
                return Ok(user);
            }
            user.favorite_recipes.retain(|&id| id != recipe_id);

            match self.store.swap_user(snapshot.version, user.clone()).await? {
                CasOutcome::Committed => {
                    tracing::info!(user_id, recipe_id, "Recipe unfavorited");
                    return Ok(user);
                }
                CasOutcome::Stale => continue,
            }
        }

        Err(CatalogError::WriteConflict {
            id: user_id,
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }
}
