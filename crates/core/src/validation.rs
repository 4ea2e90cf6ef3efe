//! Defensive payload checks.
//!
//! The boundary validation collaborator is the primary authority for request
//! shape; these checks are the narrow re-checks the catalog performs itself
//! so an invariant-breaking payload can never reach the store.

use crate::error::CatalogError;
use crate::recipe::NewRecipe;

/// Maximum recipe title length, characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum recipe description length, characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Maximum comment length, characters.
pub const MAX_COMMENT_LEN: usize = 500;

/// Inclusive rating bounds.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Validate a recipe creation payload.
pub fn validate_new_recipe(input: &NewRecipe) -> Result<(), CatalogError> {
    if input.ingredients.is_empty() {
        return Err(CatalogError::EmptyIngredients);
    }
    if input.instructions.is_empty() {
        return Err(CatalogError::EmptyInstructions);
    }
    if input.title.trim().is_empty() {
        return Err(CatalogError::Validation("Title is required".to_string()));
    }
    if input.title.chars().count() > MAX_TITLE_LEN {
        return Err(CatalogError::Validation(format!(
            "Title exceeds {MAX_TITLE_LEN} characters"
        )));
    }
    if input.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CatalogError::Validation(format!(
            "Description exceeds {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    if input.servings < 1 {
        return Err(CatalogError::Validation(
            "Servings must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Validate a rating value against the inclusive 1-5 bounds.
pub fn validate_rating(value: u8) -> Result<(), CatalogError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(CatalogError::InvalidRating(value));
    }
    Ok(())
}

/// Validate comment text: non-empty and within the length bound.
pub fn validate_comment_text(text: &str) -> Result<(), CatalogError> {
    if text.trim().is_empty() {
        return Err(CatalogError::Validation(
            "Comment text is required".to_string(),
        ));
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(CatalogError::Validation(format!(
            "Comment exceeds {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(())
}
