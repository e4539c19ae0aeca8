// ABOUTME: Goal comparison: over-goal detection and clamped progress fractions
// ABOUTME: A zero or negative goal means "no goal set" and never flags over-goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

//! # Goal Comparator
//!
//! Compares a day's aggregated totals against user-configured targets, one
//! nutrient dimension at a time. Over-goal requires strictly exceeding a
//! positive goal; progress fractions are clamped to `[0, 1]` so indicators
//! cap at full while the over-goal flag keeps carrying the excess signal.

use serde::{Deserialize, Serialize};

use crate::models::Nutrients;

/// One of the four tracked nutrient dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    /// Energy in kilocalories
    Calories,
    /// Carbohydrates in grams
    Carbohydrates,
    /// Fat in grams
    Fat,
    /// Protein in grams
    Protein,
}

impl NutrientKind {
    /// All dimensions in their fixed display order.
    pub const ALL: [Self; 4] = [
        Self::Calories,
        Self::Carbohydrates,
        Self::Fat,
        Self::Protein,
    ];

    /// Project this dimension out of a nutrient vector.
    #[must_use]
    pub const fn of(self, nutrients: &Nutrients) -> f64 {
        match self {
            Self::Calories => nutrients.calories,
            Self::Carbohydrates => nutrients.carbohydrates,
            Self::Fat => nutrients.fat,
            Self::Protein => nutrients.protein,
        }
    }

    /// Stable identifier for this dimension (matches the serde form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Carbohydrates => "carbohydrates",
            Self::Fat => "fat",
            Self::Protein => "protein",
        }
    }
}

/// Result of comparing one aggregated total against one goal value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    /// Whether the total strictly exceeds a positive goal
    pub over_goal: bool,
    /// Progress toward the goal, clamped to `[0, 1]`
    pub fraction: f64,
}

/// Whether `total` strictly exceeds a positive `goal`.
///
/// A goal of zero or below is treated as "no goal set" and never triggers,
/// so an unconfigured target cannot flag spuriously.
#[must_use]
pub fn is_over_goal(total: f64, goal: f64) -> bool {
    total > goal && goal > 0.0
}

/// Progress toward a goal, clamped to `[0, 1]`.
///
/// Sizes progress indicators: beyond-goal totals cap at full even though
/// [`is_over_goal`] stays true. An unset goal reads as zero progress.
#[must_use]
pub fn progress_fraction(total: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        (total / goal).min(1.0)
    } else {
        0.0
    }
}

/// Compare one aggregated total against one goal value.
#[must_use]
pub fn evaluate_goal(total: f64, goal: f64) -> GoalEvaluation {
    GoalEvaluation {
        over_goal: is_over_goal(total, goal),
        fraction: progress_fraction(total, goal),
    }
}

/// One row of the daily summary: a dimension's total, goal, and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    /// The nutrient dimension this row describes
    pub kind: NutrientKind,
    /// Aggregated whole-day total for this dimension
    pub total: f64,
    /// Configured goal for this dimension
    pub goal: f64,
    /// Whether the total strictly exceeds a positive goal
    pub over_goal: bool,
    /// Progress toward the goal, clamped to `[0, 1]`
    pub fraction: f64,
}

/// Evaluate all four dimensions of a day against the configured goals.
///
/// Returns rows in display order, ready for the summary view to render.
#[must_use]
pub fn daily_summary(totals: &Nutrients, goals: &Nutrients) -> Vec<NutrientProgress> {
    NutrientKind::ALL
        .iter()
        .map(|&kind| {
            let total = kind.of(totals);
            let goal = kind.of(goals);
            let evaluation = evaluate_goal(total, goal);
            NutrientProgress {
                kind,
                total,
                goal,
                over_goal: evaluation.over_goal,
                fraction: evaluation.fraction,
            }
        })
        .collect()
}
