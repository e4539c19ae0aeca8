// ABOUTME: Macro-nutrient value vector with additive combination semantics
// ABOUTME: Nutrients is the unit of account for foods, recipes, meals, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Macro-nutrient totals for a food, a meal, a whole day, or a goal.
///
/// Values are expressed relative to whatever quantity the owner declares
/// (a catalog entry's stated serving, a day's intake, a daily target).
/// Combination is field-wise addition; the all-zero vector is the identity.
/// No rounding happens at this layer - formatting is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kilocalories
    pub calories: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Protein in grams
    pub protein: f64,
}

impl Nutrients {
    /// The additive identity: zero across all four dimensions.
    pub const ZERO: Self = Self {
        calories: 0.0,
        carbohydrates: 0.0,
        fat: 0.0,
        protein: 0.0,
    };

    /// Create a value from the four macro dimensions.
    #[must_use]
    pub const fn new(calories: f64, carbohydrates: f64, fat: f64, protein: f64) -> Self {
        Self {
            calories,
            carbohydrates,
            fat,
            protein,
        }
    }

    /// Field-wise sum of two values.
    ///
    /// Commutative and associative; `Nutrients::ZERO` is the identity.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            fat: self.fat + other.fat,
            protein: self.protein + other.protein,
        }
    }

    /// Field-wise multiplication by a non-negative scalar.
    ///
    /// Used for recipe portion scaling (`factor` = ingredient amount over
    /// the referenced food's base magnitude).
    #[must_use]
    pub const fn scale(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            carbohydrates: self.carbohydrates * factor,
            fat: self.fat * factor,
            protein: self.protein * factor,
        }
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::add(self, other)
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, other: Self) {
        *self = Self::add(*self, other);
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::add)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_zero_is_additive_identity() {
        let v = Nutrients::new(130.0, 28.0, 0.3, 2.7);
        assert_eq!(v.add(Nutrients::ZERO), v);
        assert_eq!(Nutrients::ZERO.add(v), v);
    }

    #[test]
    fn test_add_commutes_and_associates() {
        let a = Nutrients::new(130.0, 28.0, 0.3, 2.7);
        let b = Nutrients::new(76.0, 14.0, 0.5, 5.0);
        let c = Nutrients::new(165.0, 0.0, 0.3, 31.0);

        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.add(b).add(c), a.add(b.add(c)));
    }

    #[test]
    fn test_scale_by_two_equals_self_sum() {
        let v = Nutrients::new(155.0, 1.1, 11.0, 13.0);
        assert_eq!(v.scale(2.0), v.add(v));
    }

    #[test]
    fn test_scale_by_zero_is_zero() {
        let v = Nutrients::new(300.0, 3.0, 22.0, 22.0);
        assert_eq!(v.scale(0.0), Nutrients::ZERO);
    }

    #[test]
    fn test_sum_over_iterator() {
        let total: Nutrients = [
            Nutrients::new(100.0, 10.0, 1.0, 5.0),
            Nutrients::new(200.0, 20.0, 2.0, 10.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Nutrients::new(300.0, 30.0, 3.0, 15.0));
    }
}
