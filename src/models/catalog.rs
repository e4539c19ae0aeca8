// ABOUTME: Food catalog entries, ingredient snapshots, and the catalog collection
// ABOUTME: Entries are basic foods or recipes composed of weighted ingredient references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::nutrition::Nutrients;

/// A weighted reference from a recipe to another catalog entry.
///
/// This is a point-in-time snapshot, not a live join: `name` and
/// `base_quantity` are denormalized copies captured when the recipe was
/// authored. If the referenced entry is edited or deleted later, existing
/// recipes keep the snapshot and stay computable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Id of the referenced catalog entry
    pub food_id: String,
    /// Display name of the referenced entry at authoring time
    pub name: String,
    /// Amount of this ingredient in grams or units (> 0)
    pub amount: f64,
    /// The referenced entry's quantity string at authoring time (e.g. "100g")
    pub base_quantity: String,
}

impl Ingredient {
    /// Snapshot an ingredient reference from a catalog entry.
    #[must_use]
    pub fn of(food: &Food, amount: f64) -> Self {
        Self {
            food_id: food.id.clone(),
            name: food.name.clone(),
            amount,
            base_quantity: food.quantity.clone(),
        }
    }
}

/// Discriminates basic foods from recipes.
///
/// A recipe carries its ordered ingredient list; a basic food carries
/// nothing beyond the shared entry fields. Recipes are authored through
/// [`crate::composer::author_recipe`], which enforces a non-empty
/// ingredient list at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FoodKind {
    /// A directly-authored food with nutrients stated per `quantity`
    Basic,
    /// A composed entry whose nutrients were derived from its ingredients
    Recipe {
        /// Ordered ingredient references (non-empty at authoring)
        ingredients: Vec<Ingredient>,
    },
}

/// A named catalog entry with nutrients stated per its display quantity.
///
/// `quantity` is a free-text serving description (`"100g"`, `"1x"`,
/// `"1 serving"`). Its leading digits are what recipe composition scales
/// against - a loose convention inherited from manual entry, not a unit
/// system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Unique, stable identifier within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text reference serving (e.g. "100g", "1x")
    pub quantity: String,
    /// Nutrients per the stated quantity
    pub nutrients: Nutrients,
    /// Basic food or recipe discriminant
    #[serde(flatten)]
    pub kind: FoodKind,
    /// When this entry was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Food {
    /// Create a basic (non-recipe) catalog entry with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EmptyName`] if `name` is blank.
    pub fn basic(
        name: impl Into<String>,
        quantity: impl Into<String>,
        nutrients: Nutrients,
    ) -> TrackerResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::EmptyName);
        }
        let id = generate_id(&name);
        Ok(Self {
            id,
            name,
            quantity: quantity.into(),
            nutrients,
            kind: FoodKind::Basic,
            created_at: Utc::now(),
        })
    }

    /// Whether this entry is a recipe.
    #[must_use]
    pub const fn is_recipe(&self) -> bool {
        matches!(self.kind, FoodKind::Recipe { .. })
    }

    /// The ingredient list, present only on recipes.
    #[must_use]
    pub fn ingredients(&self) -> Option<&[Ingredient]> {
        match &self.kind {
            FoodKind::Basic => None,
            FoodKind::Recipe { ingredients } => Some(ingredients),
        }
    }
}

/// Derive a stable catalog id from a display name.
///
/// Lowercased name with whitespace collapsed to dashes, suffixed with a
/// random fragment so two entries may share a display name.
fn generate_id(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{slug}-{}", &suffix[..8])
}

/// The full set of known catalog entries, basic foods and recipes alike.
///
/// Preserves insertion order for display and enforces id uniqueness.
/// Removal never cascades: a recipe referencing a removed entry stays in
/// the catalog and remains computable (the composer skips the dangling
/// reference).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    foods: Vec<Food>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { foods: Vec::new() }
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Add an entry to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DuplicateFood`] if an entry with the same id
    /// already exists.
    pub fn add(&mut self, food: Food) -> TrackerResult<()> {
        if self.get(&food.id).is_some() {
            return Err(TrackerError::duplicate_food(food.id));
        }
        self.foods.push(food);
        Ok(())
    }

    /// Remove an entry by id, returning it if present.
    ///
    /// Recipes referencing the removed entry are left untouched; their
    /// ingredient snapshots keep them computable.
    pub fn remove(&mut self, id: &str) -> Option<Food> {
        let index = self.foods.iter().position(|f| f.id == id)?;
        Some(self.foods.remove(index))
    }

    /// Edit a basic food's display fields and nutrients in place.
    ///
    /// Existing recipes that reference the entry are deliberately not
    /// recomputed (their ingredient lists hold authoring-time snapshots),
    /// and entries already placed in meal slots are independent copies.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::FoodNotFound`] for an unknown id,
    /// [`TrackerError::RecipeImmutable`] if the entry is a recipe, and
    /// [`TrackerError::EmptyName`] for a blank name.
    pub fn update_basic(
        &mut self,
        id: &str,
        name: impl Into<String>,
        quantity: impl Into<String>,
        nutrients: Nutrients,
    ) -> TrackerResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::EmptyName);
        }
        let food = self
            .foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| TrackerError::food_not_found(id))?;
        if food.is_recipe() {
            return Err(TrackerError::recipe_immutable(id));
        }
        food.name = name;
        food.quantity = quantity.into();
        food.nutrients = nutrients;
        Ok(())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Food> {
        self.foods.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Food;
    type IntoIter = std::slice::Iter<'a, Food>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}
