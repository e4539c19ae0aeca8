// ABOUTME: Core data models for the diet tracker
// ABOUTME: Re-exports nutrient vectors, catalog entries, meal plans, and weight history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

//! # Data Models
//!
//! Plain serializable value types shared across the crate. Everything here
//! is a snapshot: the computation layers take these by reference and return
//! new values, and the (external) persistence layer round-trips them as
//! JSON blobs.
//!
//! ## Core Models
//!
//! - [`Nutrients`]: the four-dimension macro vector with additive semantics
//! - [`Food`] / [`FoodKind`] / [`Ingredient`]: catalog entries, basic or
//!   recipe, with snapshot ingredient references
//! - [`Catalog`]: the id-unique entry collection
//! - [`MealSlot`] / [`SelectedFood`] / [`MealPlan`]: a day's placements
//! - [`WeightEntry`] / [`WeightLog`]: weight-over-time history

// Domain modules
mod catalog;
mod nutrition;
mod plan;
mod weight;

// Re-export all public types for convenience
pub use catalog::{Catalog, Food, FoodKind, Ingredient};
pub use nutrition::Nutrients;
pub use plan::{MealPlan, MealSlot, SelectedFood};
pub use weight::{WeightEntry, WeightLog};
