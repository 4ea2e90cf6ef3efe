//! Shared fixtures for store integration tests.

use std::sync::Arc;

use ladle_core::recipe::{Diet, Difficulty, Ingredient, InstructionStep, NewRecipe, NewUser, User};
use ladle_store::store::{RecipeStore, UserStore};
use ladle_store::MemoryStore;

pub fn new_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// A valid creation payload with the given title.
pub fn recipe_payload(title: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: "Test recipe".to_string(),
        image: None,
        cuisine: "Italian".to_string(),
        diet: Diet::Regular,
        difficulty: Difficulty::Easy,
        ingredients: vec![Ingredient {
            name: "Tomato".to_string(),
            amount: "2".to_string(),
        }],
        instructions: vec![InstructionStep {
            step: 1,
            description: "Chop".to_string(),
        }],
        prep_time: 10,
        cook_time: 20,
        servings: 2,
        calories: Some(400),
        tags: Vec::new(),
    }
}

pub async fn seed_user(store: &MemoryStore, username: &str) -> User {
    store
        .insert_user(NewUser {
            username: username.to_string(),
            avatar: None,
            bio: None,
        })
        .await
        .unwrap()
}

pub async fn seed_recipe(store: &MemoryStore, author_id: i64, title: &str) -> i64 {
    store
        .insert_recipe(author_id, recipe_payload(title))
        .await
        .unwrap()
        .id
}
