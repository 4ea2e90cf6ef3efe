//! Integration tests for the engagement mutations: rating upsert semantics,
//! append-only comments, the favorite/unfavorite asymmetry, and lost-update
//! protection under concurrent writers.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use futures::future::join_all;

use async_trait::async_trait;
use common::{new_store, seed_recipe, seed_user};
use ladle_core::error::CatalogError;
use ladle_core::rating::average_rating;
use ladle_core::recipe::{NewRecipe, NewUser, Recipe, User};
use ladle_core::types::DbId;
use ladle_store::engagement::MAX_WRITE_ATTEMPTS;
use ladle_store::store::{CasOutcome, RecipeStore, UserStore, Versioned};
use ladle_store::{EngagementManager, MemoryStore};

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rating_twice_keeps_one_entry_with_latest_value() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let rater = seed_user(&store, "rater").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;

    let engagement = EngagementManager::new(Arc::clone(&store));
    engagement.rate(recipe_id, rater.id, 2).await.unwrap();
    let recipe = engagement.rate(recipe_id, rater.id, 5).await.unwrap();

    assert_eq!(recipe.ratings.len(), 1);
    assert_eq!(recipe.ratings[0].user_id, rater.id);
    assert_eq!(recipe.ratings[0].value, 5);
    assert_eq!(average_rating(&recipe.ratings), 5.0);
}

#[tokio::test]
async fn average_reflects_latest_value_per_user() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    let alice = seed_user(&store, "alice").await;
    let bob = seed_user(&store, "bob").await;
    let carol = seed_user(&store, "carol").await;

    engagement.rate(recipe_id, alice.id, 5).await.unwrap();
    engagement.rate(recipe_id, bob.id, 4).await.unwrap();
    engagement.rate(recipe_id, carol.id, 1).await.unwrap();
    // Carol reconsiders; only her latest value counts.
    let recipe = engagement.rate(recipe_id, carol.id, 3).await.unwrap();

    assert_eq!(recipe.ratings.len(), 3);
    assert_eq!(average_rating(&recipe.ratings), 4.0);
}

#[tokio::test]
async fn out_of_bounds_rating_is_rejected() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.rate(recipe_id, author.id, 0).await,
        Err(CatalogError::InvalidRating(0))
    );
    assert_matches!(
        engagement.rate(recipe_id, author.id, 6).await,
        Err(CatalogError::InvalidRating(6))
    );

    // The rejected calls left no entries behind.
    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert!(recipe.ratings.is_empty());
}

#[tokio::test]
async fn rating_missing_recipe_fails_and_changes_nothing() {
    let store = new_store();
    let user = seed_user(&store, "rater").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.rate(999, user.id, 3).await,
        Err(CatalogError::RecipeNotFound { id: 999 })
    );
    assert!(store.scan_recipes().await.unwrap().is_empty());
}

#[tokio::test]
async fn fifty_concurrent_raters_lose_no_writes() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Hot recipe").await;

    let mut raters = Vec::new();
    for i in 0..50 {
        raters.push(seed_user(&store, &format!("rater-{i}")).await);
    }

    let tasks = raters.into_iter().map(|rater| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            let engagement = EngagementManager::new(store);
            let value = (rater.id % 5) as u8 + 1;
            engagement.rate(recipe_id, rater.id, value).await
        })
    });

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert_eq!(recipe.ratings.len(), 50);

    // One entry per user, no duplicates.
    let mut user_ids: Vec<i64> = recipe.ratings.iter().map(|r| r.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    assert_eq!(user_ids.len(), 50);
}

#[tokio::test]
async fn same_user_racing_rates_resolves_to_a_single_entry() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let rater = seed_user(&store, "rater").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;

    let tasks = (1..=5u8).map(|value| {
        let store = Arc::clone(&store);
        let user_id = rater.id;
        tokio::spawn(async move {
            let engagement = EngagementManager::new(store);
            engagement.rate(recipe_id, user_id, value).await
        })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert_eq!(recipe.ratings.len(), 1);
    // Whichever write committed last, the value is one of the submitted ones.
    assert!((1..=5).contains(&recipe.ratings[0].value));
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comments_append_in_order() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let commenter = seed_user(&store, "commenter").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    engagement
        .comment(recipe_id, commenter.id, "hi")
        .await
        .unwrap();
    engagement
        .comment(recipe_id, commenter.id, "there")
        .await
        .unwrap();

    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert_eq!(recipe.comments.len(), 2);
    assert_eq!(recipe.comments[0].text, "hi");
    assert_eq!(recipe.comments[1].text, "there");
}

#[tokio::test]
async fn duplicate_comment_text_is_allowed() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    engagement.comment(recipe_id, author.id, "yum").await.unwrap();
    engagement.comment(recipe_id, author.id, "yum").await.unwrap();

    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert_eq!(recipe.comments.len(), 2);
}

#[tokio::test]
async fn comment_on_missing_recipe_fails() {
    let store = new_store();
    let user = seed_user(&store, "commenter").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.comment(42, user.id, "hello").await,
        Err(CatalogError::RecipeNotFound { id: 42 })
    );
}

#[tokio::test]
async fn comment_for_unknown_user_fails_and_persists_nothing() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.comment(recipe_id, 999, "hello").await,
        Err(CatalogError::UserNotFound { id: 999 })
    );

    let recipe = store.fetch_recipe(recipe_id).await.unwrap().unwrap().record;
    assert!(recipe.comments.is_empty());
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.comment(recipe_id, author.id, "   ").await,
        Err(CatalogError::Validation(_))
    );
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refavoriting_is_rejected_not_ignored() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let fan = seed_user(&store, "fan").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    let user = engagement.favorite(fan.id, recipe_id).await.unwrap();
    assert_eq!(user.favorite_recipes, vec![recipe_id]);

    assert_matches!(
        engagement.favorite(fan.id, recipe_id).await,
        Err(CatalogError::AlreadyFavorited { .. })
    );
}

#[tokio::test]
async fn unfavoriting_a_non_member_is_a_silent_no_op() {
    let store = new_store();
    let fan = seed_user(&store, "fan").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    // No favorites at all; removal succeeds without touching anything.
    let user = engagement.unfavorite(fan.id, 123).await.unwrap();
    assert!(user.favorite_recipes.is_empty());
}

#[tokio::test]
async fn favorite_requires_the_recipe_to_exist() {
    let store = new_store();
    let fan = seed_user(&store, "fan").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.favorite(fan.id, 77).await,
        Err(CatalogError::RecipeNotFound { id: 77 })
    );
}

#[tokio::test]
async fn favorite_then_unfavorite_roundtrip() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let fan = seed_user(&store, "fan").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    engagement.favorite(fan.id, recipe_id).await.unwrap();
    let user = engagement.unfavorite(fan.id, recipe_id).await.unwrap();
    assert!(user.favorite_recipes.is_empty());

    // After removal the recipe can be favorited again.
    let user = engagement.favorite(fan.id, recipe_id).await.unwrap();
    assert_eq!(user.favorite_recipes, vec![recipe_id]);
}

#[tokio::test]
async fn favorite_for_unknown_user_fails() {
    let store = new_store();
    let author = seed_user(&store, "author").await;
    let recipe_id = seed_recipe(&store, author.id, "Pasta").await;
    let engagement = EngagementManager::new(Arc::clone(&store));

    assert_matches!(
        engagement.favorite(999, recipe_id).await,
        Err(CatalogError::UserNotFound { id: 999 })
    );
}

// ---------------------------------------------------------------------------
// Retry exhaustion
// ---------------------------------------------------------------------------

/// Store whose swaps always lose the race, as if another writer commits
/// between every fetch and swap. Reads and inserts pass through.
struct ContestedStore {
    inner: MemoryStore,
}

#[async_trait]
impl RecipeStore for ContestedStore {
    async fn insert_recipe(
        &self,
        author_id: DbId,
        input: NewRecipe,
    ) -> Result<Recipe, CatalogError> {
        self.inner.insert_recipe(author_id, input).await
    }

    async fn fetch_recipe(&self, id: DbId) -> Result<Option<Versioned<Recipe>>, CatalogError> {
        self.inner.fetch_recipe(id).await
    }

    async fn swap_recipe(&self, _expected: u64, _recipe: Recipe) -> Result<CasOutcome, CatalogError> {
        Ok(CasOutcome::Stale)
    }

    async fn scan_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.inner.scan_recipes().await
    }
}

#[async_trait]
impl UserStore for ContestedStore {
    async fn insert_user(&self, input: NewUser) -> Result<User, CatalogError> {
        self.inner.insert_user(input).await
    }

    async fn fetch_user(&self, id: DbId) -> Result<Option<Versioned<User>>, CatalogError> {
        self.inner.fetch_user(id).await
    }

    async fn swap_user(&self, _expected: u64, _user: User) -> Result<CasOutcome, CatalogError> {
        Ok(CasOutcome::Stale)
    }
}

#[tokio::test]
async fn rate_surfaces_write_conflict_when_every_swap_loses() {
    let inner = MemoryStore::new();
    let author = seed_user(&inner, "author").await;
    let rater = seed_user(&inner, "rater").await;
    let recipe_id = seed_recipe(&inner, author.id, "Hot recipe").await;

    let engagement = EngagementManager::new(Arc::new(ContestedStore { inner }));
    assert_matches!(
        engagement.rate(recipe_id, rater.id, 4).await,
        Err(CatalogError::WriteConflict { id, attempts })
            if id == recipe_id && attempts == MAX_WRITE_ATTEMPTS
    );
}

#[tokio::test]
async fn favorite_surfaces_write_conflict_when_every_swap_loses() {
    let inner = MemoryStore::new();
    let author = seed_user(&inner, "author").await;
    let fan = seed_user(&inner, "fan").await;
    let recipe_id = seed_recipe(&inner, author.id, "Hot recipe").await;

    let engagement = EngagementManager::new(Arc::new(ContestedStore { inner }));
    assert_matches!(
        engagement.favorite(fan.id, recipe_id).await,
        Err(CatalogError::WriteConflict { id, attempts })
            if id == fan.id && attempts == MAX_WRITE_ATTEMPTS
    );
}
