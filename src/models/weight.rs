// ABOUTME: Weight-over-time history backing the progress view
// ABOUTME: Ordered read views for list and chart rendering; geometry stays in the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TrackerError, TrackerResult};

/// A single logged body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms (> 0)
    pub weight_kg: f64,
}

/// Weight measurements over time.
///
/// Entries are kept in insertion order; the ordered views below are what
/// the list and chart renderers consume. Two entries may share a date -
/// the log records what the user typed, it does not deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightLog {
    entries: Vec<WeightEntry>,
}

impl WeightLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Log a measurement.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidWeight`] for a non-positive weight.
    pub fn add(&mut self, date: NaiveDate, weight_kg: f64) -> TrackerResult<&WeightEntry> {
        if weight_kg <= 0.0 {
            return Err(TrackerError::InvalidWeight { value: weight_kg });
        }
        self.entries.push(WeightEntry {
            id: Uuid::new_v4(),
            date,
            weight_kg,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove an entry by id, returning it if present.
    pub fn remove(&mut self, id: Uuid) -> Option<WeightEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Entries sorted newest date first, for the list view.
    #[must_use]
    pub fn newest_first(&self) -> Vec<&WeightEntry> {
        let mut sorted: Vec<&WeightEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Entries sorted oldest date first, the chart's data feed.
    #[must_use]
    pub fn chronological(&self) -> Vec<&WeightEntry> {
        let mut sorted: Vec<&WeightEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }

    /// The most recent measurement by date, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.iter().max_by_key(|e| e.date)
    }

    /// Net change in kilograms from the earliest to the latest entry.
    ///
    /// `None` until at least two entries exist.
    #[must_use]
    pub fn change_from_start(&self) -> Option<f64> {
        if self.entries.len() < 2 {
            return None;
        }
        let first = self.entries.iter().min_by_key(|e| e.date)?;
        let last = self.entries.iter().max_by_key(|e| e.date)?;
        Some(last.weight_kg - first.weight_kg)
    }

    /// Number of logged entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
