//! Recipe and user records plus their creation payloads.
//!
//! Ratings and comments are embedded sub-collections owned by the recipe;
//! they are mutated only through the engagement services, which serialize
//! writers per record at the store boundary.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Dietary category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Keto,
    Paleo,
    Regular,
}

/// Preparation difficulty of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One ingredient line: a name plus a free-form amount ("2 cups").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// One numbered instruction step. Step numbers are expected to increase but
/// are not enforced unique by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub step: u32,
    pub description: String,
}

/// A single user's rating of a recipe. At most one entry per user per recipe;
/// re-rating overwrites the value in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: DbId,
    pub value: u8,
    pub created_at: Timestamp,
}

/// An append-only comment entry. Insertion order is preserved and duplicates
/// are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
}

/// The central catalog record.
///
/// `average_rating` and `total_time` are deliberately absent: they are
/// derived values, recomputed on every read via [`crate::rating`], never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub cuisine: String,
    pub diet: Diet,
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub calories: Option<u32>,
    /// Set once at creation, never reassigned.
    pub author_id: DbId,
    pub ratings: Vec<Rating>,
    pub comments: Vec<Comment>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Recipe {
    /// The rating entry contributed by `user_id`, if any.
    pub fn rating_by(&self, user_id: DbId) -> Option<&Rating> {
        self.ratings.iter().find(|r| r.user_id == user_id)
    }
}

/// Creation payload for a recipe. The author id is supplied separately by
/// the caller (it comes from the identity boundary, not the request body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub cuisine: String,
    pub diet: Diet,
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A catalog user. Only the fields the catalog core needs; credentials and
/// sessions belong to the external identity collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    /// Favorited recipe ids. Set semantics (no duplicates) are enforced by
    /// the engagement service, which rejects re-favoriting.
    pub favorite_recipes: Vec<DbId>,
    pub created_at: Timestamp,
}

/// Creation payload for a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}
