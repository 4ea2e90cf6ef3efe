//! Catalog services: creation, lookup, filtered listing.
//!
//! Listing reads a snapshot of the collection, applies the filter predicate,
//! orders deterministically, and slices one page. Ordering and page math
//! live in `ladle_core::pagination`; this module only wires them to the
//! store.

use std::sync::Arc;

use ladle_core::error::CatalogError;
use ladle_core::filter::RecipeFilter;
use ladle_core::pagination::{
    paginate, sort_newest_first, sort_top_rated, Page, PageRequest, POPULAR_LIMIT,
};
use ladle_core::recipe::{NewRecipe, NewUser, Recipe, User};
use ladle_core::types::DbId;
use ladle_core::validation::validate_new_recipe;

use crate::store::{RecipeStore, UserStore};

/// Read-side and creation operations over the catalog.
pub struct Catalog<S> {
    store: Arc<S>,
}

impl<S> Catalog<S>
where
    S: RecipeStore + UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a recipe owned by `author_id`.
    ///
    /// The payload must carry at least one ingredient and one instruction
    /// step, and the author must resolve to an existing user.
    pub async fn create_recipe(
        &self,
        author_id: DbId,
        input: NewRecipe,
    ) -> Result<Recipe, CatalogError> {
        validate_new_recipe(&input)?;

        if self.store.fetch_user(author_id).await?.is_none() {
            return Err(CatalogError::UserNotFound { id: author_id });
        }

        let recipe = self.store.insert_recipe(author_id, input).await?;
        tracing::info!(recipe_id = recipe.id, author_id, "Recipe created");
        Ok(recipe)
    }

    /// Fetch a recipe by id. A missing recipe is a typed failure, never an
    /// empty result.
    pub async fn get_recipe(&self, id: DbId) -> Result<Recipe, CatalogError> {
        Ok(self
            .store
            .fetch_recipe(id)
            .await?
            .ok_or(CatalogError::RecipeNotFound { id })?
            .record)
    }

    /// Filtered, paginated listing ordered by creation time, newest first.
    pub async fn search(
        &self,
        filter: &RecipeFilter,
        request: PageRequest,
    ) -> Result<Page<Recipe>, CatalogError> {
        let mut matched: Vec<Recipe> = self
            .store
            .scan_recipes()
            .await?
            .into_iter()
            .filter(|recipe| filter.matches(recipe))
            .collect();

        sort_newest_first(&mut matched);
        Ok(paginate(matched, request))
    }

    /// Fixed-size top slice ordered by recomputed average rating descending,
    /// then creation time descending. No further pagination.
    pub async fn popular(&self) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes = self.store.scan_recipes().await?;
        sort_top_rated(&mut recipes);
        recipes.truncate(POPULAR_LIMIT);
        Ok(recipes)
    }

    /// Create a user profile.
    pub async fn create_user(&self, input: NewUser) -> Result<User, CatalogError> {
        if input.username.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Username is required".to_string(),
            ));
        }
        let user = self.store.insert_user(input).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: DbId) -> Result<User, CatalogError> {
        Ok(self
            .store
            .fetch_user(id)
            .await?
            .ok_or(CatalogError::UserNotFound { id })?
            .record)
    }
}
