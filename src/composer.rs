// ABOUTME: Recipe composition engine: scales ingredient references into nutrient totals
// ABOUTME: Tolerates dangling references and unparseable quantity strings by degrading to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

//! # Recipe Composer
//!
//! Turns a recipe's ingredient list into nutrient values by proportional
//! scaling against the catalog. Two contracts matter here:
//!
//! - Composition is **total**: a reference to a deleted entry contributes
//!   zero instead of failing, because recipes are authoring-time snapshots
//!   that must stay computable across later catalog edits.
//! - The quantity convention is **loose**: the base magnitude of a serving
//!   is whatever leading digit run its free-text quantity string carries
//!   (`"100g"` → 100, `"1x"` → 1), and a string with no leading digits
//!   falls back to 1. A known precision limitation, never a crash.

use tracing::debug;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Catalog, Food, FoodKind, Ingredient, Nutrients};

/// Quantity string recipes are authored with: one serving of the dish.
const RECIPE_QUANTITY: &str = "1 serving";

/// Total and per-serving nutrients for a composed recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeNutrition {
    /// Sum over all ingredients at their stated amounts
    pub total: Nutrients,
    /// `total` divided by the servings count
    pub per_serving: Nutrients,
}

/// Extract the base magnitude from a quantity string.
///
/// Parses the leading run of ASCII digits: `"100g"` → 100, `"1x"` → 1,
/// `"250 ml"` → 250. A string with no leading digits (`"a pinch"`) yields
/// 1, so the ingredient amount passes through as the multiplier unchanged.
#[must_use]
pub fn base_magnitude(quantity: &str) -> f64 {
    let digits: String = quantity
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(1.0)
}

/// Sum the nutrient contributions of an ingredient list against a catalog.
///
/// Each reference is resolved by id; an unresolved reference (the food was
/// deleted after the recipe was authored) is skipped and contributes zero.
/// A resolved ingredient contributes its food's nutrients scaled by
/// `amount / base_magnitude(food.quantity)`.
#[must_use]
pub fn compute_total(ingredients: &[Ingredient], catalog: &Catalog) -> Nutrients {
    let mut total = Nutrients::ZERO;
    for ingredient in ingredients {
        let Some(food) = catalog.get(&ingredient.food_id) else {
            debug!(
                food_id = %ingredient.food_id,
                name = %ingredient.name,
                "ingredient reference no longer resolves, skipping"
            );
            continue;
        };
        let multiplier = ingredient.amount / base_magnitude(&food.quantity);
        total += food.nutrients.scale(multiplier);
    }
    total
}

/// Divide a recipe total into per-serving values.
///
/// Defined only for a positive servings count; zero yields the zero vector
/// rather than a division by zero. Authoring rejects `servings < 1` before
/// it reaches this point, so the zero branch only covers callers composing
/// raw snapshots.
#[must_use]
pub fn per_serving(total: Nutrients, servings: u32) -> Nutrients {
    if servings == 0 {
        return Nutrients::ZERO;
    }
    let servings = f64::from(servings);
    Nutrients::new(
        total.calories / servings,
        total.carbohydrates / servings,
        total.fat / servings,
        total.protein / servings,
    )
}

/// Compose a recipe's total and per-serving nutrients in one call.
#[must_use]
pub fn compute_recipe_nutrients(
    ingredients: &[Ingredient],
    catalog: &Catalog,
    servings: u32,
) -> RecipeNutrition {
    let total = compute_total(ingredients, catalog);
    RecipeNutrition {
        total,
        per_serving: per_serving(total, servings),
    }
}

/// Author a recipe as a new catalog entry.
///
/// The entry's embedded nutrients are the per-serving values computed at
/// this moment; the ingredient list is stored alongside as an
/// authoring-time snapshot. Later edits to referenced foods do not reach
/// back into the recipe.
///
/// # Errors
///
/// Returns [`TrackerError::EmptyName`] for a blank name,
/// [`TrackerError::InvalidServings`] for `servings < 1`, and
/// [`TrackerError::EmptyIngredients`] for an empty ingredient list.
pub fn author_recipe(
    name: impl Into<String>,
    servings: u32,
    ingredients: Vec<Ingredient>,
    catalog: &Catalog,
) -> TrackerResult<Food> {
    if servings == 0 {
        return Err(TrackerError::InvalidServings { servings });
    }
    if ingredients.is_empty() {
        return Err(TrackerError::EmptyIngredients);
    }

    let nutrition = compute_recipe_nutrients(&ingredients, catalog, servings);
    let mut food = Food::basic(name, RECIPE_QUANTITY, nutrition.per_serving)?;
    food.kind = FoodKind::Recipe { ingredients };
    Ok(food)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    fn catalog_with(entries: Vec<Food>) -> Catalog {
        let mut catalog = Catalog::new();
        for food in entries {
            catalog.add(food).unwrap();
        }
        catalog
    }

    #[test]
    fn test_base_magnitude_leading_digits() {
        assert_eq!(base_magnitude("100g"), 100.0);
        assert_eq!(base_magnitude("1x"), 1.0);
        assert_eq!(base_magnitude("250 ml"), 250.0);
        assert_eq!(base_magnitude(" 30g"), 30.0);
    }

    #[test]
    fn test_base_magnitude_fallback_to_one() {
        assert_eq!(base_magnitude("a pinch"), 1.0);
        assert_eq!(base_magnitude(""), 1.0);
        assert_eq!(base_magnitude("x100g"), 1.0);
    }

    #[test]
    fn test_half_base_amount_halves_nutrients() {
        let rice = Food::basic("Rice", "100g", Nutrients::new(200.0, 40.0, 2.0, 4.0)).unwrap();
        let ingredient = Ingredient::of(&rice, 50.0);
        let catalog = catalog_with(vec![rice]);

        let total = compute_total(&[ingredient], &catalog);
        assert_eq!(total, Nutrients::new(100.0, 20.0, 1.0, 2.0));
    }

    #[test]
    fn test_unresolved_reference_contributes_zero() {
        let ghost = Ingredient {
            food_id: "ghost".into(),
            name: "Ghost".into(),
            amount: 100.0,
            base_quantity: "100g".into(),
        };
        let total = compute_total(&[ghost], &Catalog::new());
        assert_eq!(total, Nutrients::ZERO);
    }

    #[test]
    fn test_digitless_quantity_degrades_to_amount_multiplier() {
        let spice = Food::basic("Spice", "a pinch", Nutrients::new(10.0, 0.0, 0.0, 0.0)).unwrap();
        let ingredient = Ingredient::of(&spice, 5.0);
        let catalog = catalog_with(vec![spice]);

        let total = compute_total(&[ingredient], &catalog);
        assert_eq!(total.calories, 50.0);
    }

    #[test]
    fn test_empty_ingredient_list_is_zero() {
        let nutrition = compute_recipe_nutrients(&[], &Catalog::new(), 4);
        assert_eq!(nutrition.total, Nutrients::ZERO);
        assert_eq!(nutrition.per_serving, Nutrients::ZERO);
    }

    #[test]
    fn test_per_serving_division_and_zero_guard() {
        let total = Nutrients::new(400.0, 0.0, 0.0, 40.0);
        assert_eq!(
            per_serving(total, 4),
            Nutrients::new(100.0, 0.0, 0.0, 10.0)
        );
        assert_eq!(per_serving(total, 0), Nutrients::ZERO);
    }
}
