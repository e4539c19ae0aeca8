// ABOUTME: Library entry point for the dieta nutrition tracking core
// ABOUTME: Catalog, recipe composition, meal-plan aggregation, goals, and weight history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

#![deny(unsafe_code)]

//! # Dieta
//!
//! The computation core of a personal nutrition-and-weight tracker: a food
//! catalog whose entries are basic foods or recipes composed of weighted
//! ingredient references, proportional scaling of those references into
//! per-serving nutrient values, whole-day aggregation across meal slots,
//! and goal-relative progress.
//!
//! ## Design Principles
//!
//! - **Pure snapshots**: every function takes immutable value snapshots and
//!   returns new values. No shared mutable state, no I/O, nothing async.
//! - **Degrade, don't fail**: composition and aggregation are total.
//!   Dangling ingredient references, digitless quantity strings, and
//!   structurally-corrupted persisted slots all resolve to a defined
//!   numeric result - silent under-counting beats a crashed view.
//! - **Validation at the boundary**: the only fallible operations are
//!   catalog mutation, recipe authoring, and weight logging, where user
//!   input first enters the system.
//!
//! UI rendering, persistence, chart geometry, and localized labels are the
//! caller's concern; this crate hands them serializable snapshots.
//!
//! ## Example
//!
//! ```rust
//! use dieta::composer;
//! use dieta::constants::{default_catalog, DEFAULT_NUTRIENT_GOALS};
//! use dieta::goals::daily_summary;
//! use dieta::models::{Ingredient, MealPlan, MealSlot};
//!
//! # fn main() -> dieta::errors::TrackerResult<()> {
//! let mut catalog = default_catalog();
//!
//! // Compose a two-serving recipe from seed foods.
//! let rice = catalog.get("arroz").cloned().unwrap();
//! let chicken = catalog.get("frango").cloned().unwrap();
//! let bowl = composer::author_recipe(
//!     "Chicken rice bowl",
//!     2,
//!     vec![Ingredient::of(&rice, 150.0), Ingredient::of(&chicken, 200.0)],
//!     &catalog,
//! )?;
//! catalog.add(bowl.clone())?;
//!
//! // Plan the day and compare against goals.
//! let mut plan = MealPlan::new();
//! plan.place(MealSlot::Lunch, &bowl);
//! let rows = daily_summary(&plan.aggregate(), &DEFAULT_NUTRIENT_GOALS);
//! assert_eq!(rows.len(), 4);
//! # Ok(())
//! # }
//! ```

/// Recipe composition: quantity scaling, totals, per-serving division
pub mod composer;

/// Seed catalog and default nutrient goals for first launch
pub mod constants;

/// Validation errors for catalog mutation, authoring, and weight logging
pub mod errors;

/// Goal comparison: over-goal detection and clamped progress fractions
pub mod goals;

/// Core data models (`Nutrients`, `Food`, `Catalog`, `MealPlan`, `WeightLog`)
pub mod models;

pub use composer::{author_recipe, compute_recipe_nutrients, RecipeNutrition};
pub use errors::{TrackerError, TrackerResult};
pub use goals::{daily_summary, evaluate_goal, GoalEvaluation, NutrientKind};
pub use models::{
    Catalog, Food, FoodKind, Ingredient, MealPlan, MealSlot, Nutrients, SelectedFood,
    WeightEntry, WeightLog,
};
