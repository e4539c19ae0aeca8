// ABOUTME: Integration tests for recipe authoring and nutrient composition
// ABOUTME: Covers scaling, per-serving division, validation, and snapshot semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use dieta::composer::{author_recipe, compute_recipe_nutrients, compute_total};
use dieta::constants::default_catalog;
use dieta::{Catalog, Food, Ingredient, Nutrients, TrackerError};

#[test]
fn test_author_recipe_end_to_end() {
    let catalog = default_catalog();
    let rice = catalog.get("arroz").cloned().unwrap();
    let chicken = catalog.get("frango").cloned().unwrap();

    // 150g rice (base 100g) + 200g chicken (base 100g), split in two.
    let recipe = author_recipe(
        "Chicken rice bowl",
        2,
        vec![Ingredient::of(&rice, 150.0), Ingredient::of(&chicken, 200.0)],
        &catalog,
    )
    .unwrap();

    assert!(recipe.is_recipe());
    assert_eq!(recipe.quantity, "1 serving");
    assert_eq!(recipe.ingredients().unwrap().len(), 2);

    // rice: 130 * 1.5 = 195, chicken: 165 * 2 = 330; per serving 262.5
    assert_eq!(recipe.nutrients.calories, 262.5);
    assert_eq!(recipe.nutrients.protein, (2.7 * 1.5 + 31.0 * 2.0) / 2.0);
}

#[test]
fn test_unit_quantity_scales_by_count() {
    let catalog = default_catalog();
    let roll = catalog.get("pao_frances").cloned().unwrap();

    // "1x" base: two rolls double the macros.
    let total = compute_total(&[Ingredient::of(&roll, 2.0)], &catalog);
    assert_eq!(total.calories, 290.0);
    assert_eq!(total.carbohydrates, 116.0);
}

#[test]
fn test_recipe_may_reference_another_recipe() {
    let mut catalog = default_catalog();
    let beans = catalog.get("feijao").cloned().unwrap();
    let inner = author_recipe("Refried beans", 2, vec![Ingredient::of(&beans, 300.0)], &catalog)
        .unwrap();
    let inner_per_serving = inner.nutrients;
    catalog.add(inner.clone()).unwrap();

    // The outer recipe reads the inner entry's embedded per-serving
    // snapshot ("1 serving" base, so amount is a serving count).
    let outer = author_recipe(
        "Beans on toast",
        1,
        vec![Ingredient::of(&inner, 2.0)],
        &catalog,
    )
    .unwrap();
    assert_eq!(outer.nutrients, inner_per_serving.scale(2.0));
}

#[test]
fn test_missing_reference_in_stored_recipe() {
    let mut catalog = default_catalog();
    let rice = catalog.get("arroz").cloned().unwrap();
    let mixed = author_recipe(
        "Rice with mystery",
        1,
        vec![
            Ingredient::of(&rice, 100.0),
            Ingredient {
                food_id: "ghost".into(),
                name: "Ghost".into(),
                amount: 100.0,
                base_quantity: "100g".into(),
            },
        ],
        &catalog,
    )
    .unwrap();
    catalog.add(mixed.clone()).unwrap();

    // Only the resolvable half contributes.
    assert_eq!(mixed.nutrients, rice.nutrients);
}

#[test]
fn test_author_recipe_validation() {
    let catalog = default_catalog();
    let rice = catalog.get("arroz").cloned().unwrap();
    let ingredients = vec![Ingredient::of(&rice, 100.0)];

    assert_eq!(
        author_recipe("Bowl", 0, ingredients.clone(), &catalog).unwrap_err(),
        TrackerError::InvalidServings { servings: 0 }
    );
    assert_eq!(
        author_recipe("Bowl", 1, Vec::new(), &catalog).unwrap_err(),
        TrackerError::EmptyIngredients
    );
    assert_eq!(
        author_recipe("  ", 1, ingredients, &catalog).unwrap_err(),
        TrackerError::EmptyName
    );
}

#[test]
fn test_compute_recipe_nutrients_contract() {
    let mut catalog = Catalog::new();
    let oats = Food::basic("Oats", "100g", Nutrients::new(400.0, 66.0, 7.0, 40.0)).unwrap();
    let ingredient = Ingredient::of(&oats, 100.0);
    catalog.add(oats).unwrap();

    let nutrition = compute_recipe_nutrients(&[ingredient], &catalog, 4);
    assert_eq!(nutrition.total.calories, 400.0);
    assert_eq!(nutrition.per_serving.calories, 100.0);
    assert_eq!(nutrition.per_serving.protein, 10.0);

    // A zero servings count never divides; it yields the zero vector.
    let degenerate = compute_recipe_nutrients(&[], &catalog, 0);
    assert_eq!(degenerate.per_serving, Nutrients::ZERO);
}
