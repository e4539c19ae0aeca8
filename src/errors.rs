// ABOUTME: Validation errors raised at the catalog and authoring boundaries
// ABOUTME: The computation core itself is total and never returns errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

//! # Error Types
//!
//! Errors here are confined to the places the design puts validation:
//! constructing catalog entries, authoring recipes, and logging weight.
//! Composition and aggregation deliberately have no error path - degenerate
//! inputs (missing references, malformed quantity strings, corrupted
//! persisted slots) degrade to a defined numeric result instead.

use thiserror::Error;

/// Convenience alias for results carrying a [`TrackerError`].
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors from catalog mutation, recipe authoring, and weight logging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// A catalog entry or recipe was given an empty display name
    #[error("name must not be empty")]
    EmptyName,

    /// An entry with the same id already exists in the catalog
    #[error("catalog already contains an entry with id '{id}'")]
    DuplicateFood {
        /// The conflicting catalog id
        id: String,
    },

    /// The requested catalog entry does not exist
    #[error("no catalog entry with id '{id}'")]
    FoodNotFound {
        /// The missing catalog id
        id: String,
    },

    /// Recipes are immutable once created; re-author instead of editing
    #[error("entry '{id}' is a recipe and cannot be edited in place")]
    RecipeImmutable {
        /// The recipe's catalog id
        id: String,
    },

    /// A recipe was authored with no ingredients
    #[error("a recipe requires at least one ingredient")]
    EmptyIngredients,

    /// A recipe was authored with a servings count below one
    #[error("servings must be at least 1, got {servings}")]
    InvalidServings {
        /// The rejected servings count
        servings: u32,
    },

    /// A weight entry carried a non-positive weight
    #[error("weight must be positive, got {value} kg")]
    InvalidWeight {
        /// The rejected weight in kilograms
        value: f64,
    },
}

impl TrackerError {
    /// Create a [`TrackerError::DuplicateFood`] for the given id.
    #[must_use]
    pub fn duplicate_food(id: impl Into<String>) -> Self {
        Self::DuplicateFood { id: id.into() }
    }

    /// Create a [`TrackerError::FoodNotFound`] for the given id.
    #[must_use]
    pub fn food_not_found(id: impl Into<String>) -> Self {
        Self::FoodNotFound { id: id.into() }
    }

    /// Create a [`TrackerError::RecipeImmutable`] for the given id.
    #[must_use]
    pub fn recipe_immutable(id: impl Into<String>) -> Self {
        Self::RecipeImmutable { id: id.into() }
    }
}
