//! Filter composition for recipe listing.
//!
//! A [`RecipeFilter`] is a declarative, side-effect-free predicate: every
//! supplied constraint must hold for a recipe to match (logical AND), and an
//! absent field imposes no constraint on that dimension. No validation
//! happens here; the boundary layer is responsible for rejecting malformed
//! input before it reaches this module.

use crate::recipe::{Diet, Difficulty, Recipe};

/// A normalized predicate over recipe fields.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Exact cuisine match.
    pub cuisine: Option<String>,
    pub diet: Option<Diet>,
    pub difficulty: Option<Difficulty>,
    /// Free-text query matched against title, description, and ingredient
    /// names.
    pub query: Option<String>,
    /// Inclusive upper bound on preparation time, minutes.
    pub max_prep_time: Option<u32>,
    /// Inclusive upper bound on cooking time, minutes.
    pub max_cook_time: Option<u32>,
    /// Inclusive upper bound on calories.
    pub max_calories: Option<u32>,
    /// Recipe matches when any of its ingredient names is in this set.
    pub ingredient_names: Option<Vec<String>>,
}

impl RecipeFilter {
    /// Whether `recipe` satisfies every supplied constraint.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(cuisine) = &self.cuisine {
            if recipe.cuisine != *cuisine {
                return false;
            }
        }

        if let Some(diet) = self.diet {
            if recipe.diet != diet {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }

        if let Some(max) = self.max_prep_time {
            if recipe.prep_time > max {
                return false;
            }
        }

        if let Some(max) = self.max_cook_time {
            if recipe.cook_time > max {
                return false;
            }
        }

        if let Some(max) = self.max_calories {
            // A recipe without a calorie count cannot prove it is under the
            // bound, so it is excluded.
            match recipe.calories {
                Some(calories) if calories <= max => {}
                _ => return false,
            }
        }

        // An empty name list is degenerate input, not a constraint that
        // nothing can satisfy.
        if let Some(names) = self.ingredient_names.as_deref().filter(|n| !n.is_empty()) {
            let any_match = recipe.ingredients.iter().any(|ingredient| {
                names
                    .iter()
                    .any(|name| ingredient.name.eq_ignore_ascii_case(name))
            });
            if !any_match {
                return false;
            }
        }

        if let Some(query) = &self.query {
            if let Some(terms) = sanitize_terms(query) {
                if !terms.iter().all(|term| text_matches(recipe, term)) {
                    return false;
                }
            }
        }

        true
    }
}

/// Sanitize free-text input into a list of search terms.
///
/// - Splits on whitespace.
/// - Strips non-alphanumeric characters (except `_`) from term edges.
/// - Drops empty terms.
///
/// Returns `None` if the input yields no usable terms, in which case the
/// query imposes no constraint.
fn sanitize_terms(query: &str) -> Option<Vec<String>> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '_')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Whether a single lowercase term appears in the recipe's title,
/// description, or any ingredient name.
fn text_matches(recipe: &Recipe, term: &str) -> bool {
    recipe.title.to_lowercase().contains(term)
        || recipe.description.to_lowercase().contains(term)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(term))
}
