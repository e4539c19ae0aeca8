// ABOUTME: Meal slots, placed-food instances, and whole-day nutrient aggregation
// ABOUTME: Tolerates structurally-corrupted persisted plans by degrading slots to empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::catalog::Food;
use crate::models::nutrition::Nutrients;

/// One of the four fixed daily meal slots, in day order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Afternoon snack
    AfternoonSnack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in their fixed day order.
    pub const ALL: [Self; 4] = [
        Self::Breakfast,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
    ];

    /// Stable identifier for this slot (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon_snack",
            Self::Dinner => "dinner",
        }
    }
}

/// A catalog entry placed into a meal slot.
///
/// `food` is an independent snapshot of the catalog entry at placement
/// time; later catalog edits do not reach into the plan. `instance_id`
/// distinguishes multiple placements of the same entry, in the same slot
/// or across slots. Instances are never mutated, only placed and removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFood {
    /// Unique per-placement identifier
    pub instance_id: Uuid,
    /// Snapshot of the placed catalog entry
    #[serde(flatten)]
    pub food: Food,
}

/// A day's plan: each meal slot holds an ordered list of placed foods.
///
/// Serializes as a plain slot-to-list map, the exact shape the (external)
/// persistence layer stores. The derived `Deserialize` is the strict path;
/// [`MealPlan::from_value`] is the tolerant one for untrusted blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    slots: BTreeMap<MealSlot, Vec<SelectedFood>>,
}

impl Default for MealPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlan {
    /// Create a plan with all four slots empty.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = BTreeMap::new();
        for slot in MealSlot::ALL {
            slots.insert(slot, Vec::new());
        }
        Self { slots }
    }

    /// Place a catalog entry into a slot, stamping a fresh instance id.
    ///
    /// Returns the instance id so the caller can later remove exactly this
    /// placement.
    pub fn place(&mut self, slot: MealSlot, food: &Food) -> Uuid {
        let instance_id = Uuid::new_v4();
        self.slots.entry(slot).or_default().push(SelectedFood {
            instance_id,
            food: food.clone(),
        });
        instance_id
    }

    /// Remove a placed instance from a slot, returning it if present.
    pub fn remove(&mut self, slot: MealSlot, instance_id: Uuid) -> Option<SelectedFood> {
        let entries = self.slots.get_mut(&slot)?;
        let index = entries.iter().position(|f| f.instance_id == instance_id)?;
        Some(entries.remove(index))
    }

    /// The placed foods in one slot, in placement order.
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[SelectedFood] {
        self.slots.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Total number of placed instances across all slots.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Whole-day nutrient total across every slot.
    ///
    /// Always covers the full day, independent of whichever slot a view is
    /// currently showing. Addition commutes, so iteration order carries no
    /// meaning.
    #[must_use]
    pub fn aggregate(&self) -> Nutrients {
        self.slots
            .values()
            .flatten()
            .map(|placed| placed.food.nutrients)
            .sum()
    }

    /// Decode a plan from an untrusted persisted value.
    ///
    /// Persisted state comes from a key-value blob the application does not
    /// control end-to-end, so this is a total function: a slot whose value
    /// is missing or not a sequence contributes an empty slot, and a
    /// sequence element of the wrong shape is skipped. Nothing here errors.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut plan = Self::new();
        let Some(map) = value.as_object() else {
            warn!("persisted meal plan is not an object, starting empty");
            return plan;
        };
        for slot in MealSlot::ALL {
            let Some(raw) = map.get(slot.as_str()) else {
                continue;
            };
            let Some(items) = raw.as_array() else {
                warn!(slot = slot.as_str(), "persisted slot is not a sequence, treating as empty");
                continue;
            };
            let entries: Vec<SelectedFood> = items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect();
            if entries.len() < items.len() {
                warn!(
                    slot = slot.as_str(),
                    dropped = items.len() - entries.len(),
                    "skipped malformed entries in persisted slot"
                );
            }
            plan.slots.insert(slot, entries);
        }
        plan
    }
}
