use crate::types::DbId;

/// Typed failure kinds surfaced by the catalog core.
///
/// A missing record is always reported as a failure, never as an empty or
/// zero result. Write-conflict retries are handled inside the store services;
/// [`CatalogError::WriteConflict`] only reaches a caller once retries are
/// exhausted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Recipe not found: {id}")]
    RecipeNotFound { id: DbId },

    #[error("User not found: {id}")]
    UserNotFound { id: DbId },

    /// Defensive bounds check; the boundary validator is the primary
    /// authority for rating shape.
    #[error("Rating must be an integer between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Recipe {recipe_id} is already in the favorites of user {user_id}")]
    AlreadyFavorited { user_id: DbId, recipe_id: DbId },

    #[error("A recipe requires at least one ingredient")]
    EmptyIngredients,

    #[error("A recipe requires at least one instruction step")]
    EmptyInstructions,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Write conflict on record {id} after {attempts} attempts")]
    WriteConflict { id: DbId, attempts: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}
