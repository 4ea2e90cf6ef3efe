//! In-process implementation of the store traits.
//!
//! Records live in `RwLock`-guarded maps; versions advance on every
//! committed swap. The whole-map write lock makes each swap atomic, while
//! readers share the read lock. Ids are assigned from an atomic sequence,
//! matching the store contract that ids are unique and monotonically
//! increasing in insertion order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use async_trait::async_trait;
use ladle_core::error::CatalogError;
use ladle_core::recipe::{NewRecipe, NewUser, Recipe, User};
use ladle_core::types::DbId;

use crate::store::{CasOutcome, RecipeStore, UserStore, Versioned};

struct Slot<T> {
    record: T,
    version: u64,
}

/// In-memory store backing both the recipe and user collections.
pub struct MemoryStore {
    recipes: RwLock<HashMap<DbId, Slot<Recipe>>>,
    users: RwLock<HashMap<DbId, Slot<User>>>,
    next_recipe_id: AtomicI64,
    next_user_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            next_recipe_id: AtomicI64::new(1),
            next_user_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert_recipe(
        &self,
        author_id: DbId,
        input: NewRecipe,
    ) -> Result<Recipe, CatalogError> {
        let id = self.next_recipe_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let recipe = Recipe {
            id,
            title: input.title,
            description: input.description,
            image: input.image,
            cuisine: input.cuisine,
            diet: input.diet,
            difficulty: input.difficulty,
            ingredients: input.ingredients,
            instructions: input.instructions,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            servings: input.servings,
            calories: input.calories,
            author_id,
            ratings: Vec::new(),
            comments: Vec::new(),
            tags: input.tags,
            created_at: now,
            updated_at: now,
        };

        self.recipes.write().await.insert(
            id,
            Slot {
                record: recipe.clone(),
                version: 1,
            },
        );
        Ok(recipe)
    }

    async fn fetch_recipe(&self, id: DbId) -> Result<Option<Versioned<Recipe>>, CatalogError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.get(&id).map(|slot| Versioned {
            record: slot.record.clone(),
            version: slot.version,
        }))
    }

    async fn swap_recipe(
        &self,
        expected: u64,
        mut recipe: Recipe,
    ) -> Result<CasOutcome, CatalogError> {
        let mut recipes = self.recipes.write().await;
        let slot = recipes
            .get_mut(&recipe.id)
            .ok_or(CatalogError::RecipeNotFound { id: recipe.id })?;

        if slot.version != expected {
            return Ok(CasOutcome::Stale);
        }

        recipe.updated_at = Utc::now();
        slot.record = recipe;
        slot.version += 1;
        Ok(CasOutcome::Committed)
    }

    async fn scan_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.values().map(|slot| slot.record.clone()).collect())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, input: NewUser) -> Result<User, CatalogError> {
        let id = self.next_user_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            username: input.username,
            avatar: input.avatar,
            bio: input.bio,
            favorite_recipes: Vec::new(),
            created_at: Utc::now(),
        };

        self.users.write().await.insert(
            id,
            Slot {
                record: user.clone(),
                version: 1,
            },
        );
        Ok(user)
    }

    async fn fetch_user(&self, id: DbId) -> Result<Option<Versioned<User>>, CatalogError> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(|slot| Versioned {
            record: slot.record.clone(),
            version: slot.version,
        }))
    }

    async fn swap_user(&self, expected: u64, user: User) -> Result<CasOutcome, CatalogError> {
        let mut users = self.users.write().await;
        let slot = users
            .get_mut(&user.id)
            .ok_or(CatalogError::UserNotFound { id: user.id })?;

        if slot.version != expected {
            return Ok(CasOutcome::Stale);
        }

        slot.record = user;
        slot.version += 1;
        Ok(CasOutcome::Committed)
    }
}
