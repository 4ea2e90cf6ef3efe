//! Shared query parameter types for API handlers.

use serde::Deserialize;

use ladle_core::filter::RecipeFilter;
use ladle_core::pagination::PageRequest;
use ladle_core::recipe::{Diet, Difficulty};

/// Query parameters for the recipe listing endpoint.
///
/// Every filter dimension is optional; absence means no constraint. The
/// `ingredients` parameter is a comma-separated list of ingredient names.
#[derive(Debug, Deserialize)]
pub struct RecipeListParams {
    pub cuisine: Option<String>,
    pub diet: Option<Diet>,
    pub difficulty: Option<Difficulty>,
    pub q: Option<String>,
    pub max_prep_time: Option<u32>,
    pub max_cook_time: Option<u32>,
    pub max_calories: Option<u32>,
    pub ingredients: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl RecipeListParams {
    /// Collapse the supplied dimensions into a filter predicate.
    pub fn filter(&self) -> RecipeFilter {
        // `ingredients=` and `ingredients=,` mean no constraint, same as an
        // absent parameter.
        let ingredient_names = self
            .ingredients
            .as_ref()
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty());

        RecipeFilter {
            cuisine: self.cuisine.clone(),
            diet: self.diet,
            difficulty: self.difficulty,
            query: self.q.clone(),
            max_prep_time: self.max_prep_time,
            max_cook_time: self.max_cook_time,
            max_calories: self.max_calories,
            ingredient_names,
        }
    }

    /// Normalized pagination request.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
