//! Abstract store traits and the optimistic-concurrency contract.
//!
//! Every record carries a store-assigned version. Writers read a
//! [`Versioned`] snapshot, mutate a copy, and attempt a compare-and-swap
//! keyed on the version they read; a concurrent commit on the same record
//! invalidates the snapshot and the swap reports [`CasOutcome::Stale`]
//! instead of silently dropping either write. Different records never
//! contend with each other.

use async_trait::async_trait;

use ladle_core::error::CatalogError;
use ladle_core::recipe::{NewRecipe, NewUser, Recipe, User};
use ladle_core::types::DbId;

/// A record snapshot paired with the store version it was read at.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub record: T,
    pub version: u64,
}

/// Outcome of a compare-and-swap write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// The write committed and the record version advanced.
    Committed,
    /// Another writer committed first; re-read and retry.
    Stale,
}

/// Persistent collection of recipe records.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a new recipe owned by `author_id`, assigning its id and
    /// timestamps. Ratings and comments start empty.
    async fn insert_recipe(
        &self,
        author_id: DbId,
        input: NewRecipe,
    ) -> Result<Recipe, CatalogError>;

    /// Fetch a versioned snapshot of a recipe.
    async fn fetch_recipe(&self, id: DbId) -> Result<Option<Versioned<Recipe>>, CatalogError>;

    /// Replace a recipe if its stored version still equals `expected`.
    ///
    /// On commit the store advances the version and refreshes the record's
    /// `updated_at` timestamp.
    async fn swap_recipe(
        &self,
        expected: u64,
        recipe: Recipe,
    ) -> Result<CasOutcome, CatalogError>;

    /// Snapshot every recipe in the collection, in no particular order.
    async fn scan_recipes(&self) -> Result<Vec<Recipe>, CatalogError>;
}

/// Persistent collection of user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, assigning their id. Favorites start empty.
    async fn insert_user(&self, input: NewUser) -> Result<User, CatalogError>;

    /// Fetch a versioned snapshot of a user.
    async fn fetch_user(&self, id: DbId) -> Result<Option<Versioned<User>>, CatalogError>;

    /// Replace a user if their stored version still equals `expected`.
    async fn swap_user(&self, expected: u64, user: User) -> Result<CasOutcome, CatalogError>;
}
