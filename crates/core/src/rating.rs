//! Derived recipe values.
//!
//! Average rating and total time are never stored on the recipe record; they
//! are recomputed on every read so they can never go stale relative to the
//! latest committed mutation.

use crate::recipe::{Rating, Recipe};

/// Arithmetic mean of all rating values, rounded half-up to one decimal
/// place. Returns `0.0` when no ratings exist.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.value)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Combined preparation and cooking time in minutes.
pub fn total_time(recipe: &Recipe) -> u32 {
    recipe.prep_time + recipe.cook_time
}
