//! Read-side view models.
//!
//! Derived values (`average_rating`, `total_time`) are computed here at
//! serialization time from the record's sub-collections; they are never read
//! from storage. Author and commenter profiles are resolved by a join
//! against the user store at read time, not duplicated into recipe records.

use serde::Serialize;

use ladle_core::rating::{average_rating, total_time};
use ladle_core::recipe::{
    Comment, Diet, Difficulty, Ingredient, InstructionStep, Recipe, User,
};
use ladle_core::types::{DbId, Timestamp};

/// Public profile fields of a user, embedded in recipe views.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub avatar: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A comment entry with its contributor's profile resolved for display.
#[derive(Debug, Serialize)]
pub struct CommentView {
    pub user: UserProfile,
    pub text: String,
    pub created_at: Timestamp,
}

impl CommentView {
    pub fn new(comment: &Comment, user: &User) -> Self {
        Self {
            user: UserProfile::from(user),
            text: comment.text.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Listing view of a recipe: descriptive fields plus derived values.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub cuisine: String,
    pub diet: Diet,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub calories: Option<u32>,
    pub tags: Vec<String>,
    pub average_rating: f64,
    pub rating_count: u64,
    pub created_at: Timestamp,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            cuisine: recipe.cuisine.clone(),
            diet: recipe.diet,
            difficulty: recipe.difficulty,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            total_time: total_time(recipe),
            servings: recipe.servings,
            calories: recipe.calories,
            tags: recipe.tags.clone(),
            average_rating: average_rating(&recipe.ratings),
            rating_count: recipe.ratings.len() as u64,
            created_at: recipe.created_at,
        }
    }
}

/// Detail view of a recipe: the summary plus structured lists, comments with
/// resolved profiles, and the author's profile.
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    pub author: UserProfile,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    pub comments: Vec<CommentView>,
    pub updated_at: Timestamp,
}

/// Public view of a user profile including their favorites.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub favorite_recipes: Vec<DbId>,
    pub created_at: Timestamp,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            favorite_recipes: user.favorite_recipes.clone(),
            created_at: user.created_at,
        }
    }
}
