// ABOUTME: Seed data for first launch: default food catalog and nutrient goals
// ABOUTME: Values are per the stated quantity string of each entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dieta Project

use chrono::Utc;

use crate::models::{Catalog, Food, FoodKind, Nutrients};

/// Default per-day nutrient targets until the user configures their own.
pub const DEFAULT_NUTRIENT_GOALS: Nutrients = Nutrients {
    calories: 1800.0,
    carbohydrates: 250.0,
    fat: 70.0,
    protein: 150.0,
};

/// Seed foods shipped with a fresh install: (id, name, quantity, macros).
const SEED_FOODS: &[(&str, &str, &str, Nutrients)] = &[
    ("arroz", "Arroz", "100g", Nutrients::new(130.0, 28.0, 0.3, 2.7)),
    ("feijao", "Feijão", "100g", Nutrients::new(76.0, 14.0, 0.5, 5.0)),
    ("frango", "Frango", "100g", Nutrients::new(165.0, 0.0, 0.3, 31.0)),
    ("patinho", "Patinho", "100g", Nutrients::new(195.0, 0.0, 8.0, 29.0)),
    ("musculo", "Músculo", "100g", Nutrients::new(200.0, 0.0, 8.0, 30.0)),
    ("acem", "Acém", "100g", Nutrients::new(235.0, 0.0, 15.0, 25.0)),
    ("paleta", "Paleta", "100g", Nutrients::new(230.0, 0.0, 15.0, 25.0)),
    ("ovo", "Ovo", "100g", Nutrients::new(155.0, 1.1, 11.0, 13.0)),
    (
        "mussarela",
        "Mussarela",
        "100g",
        Nutrients::new(300.0, 3.0, 22.0, 22.0),
    ),
    (
        "pao_frances",
        "Pão Francês",
        "1x",
        Nutrients::new(145.0, 58.0, 1.5, 4.5),
    ),
    (
        "pao_de_forma",
        "Pão de forma",
        "1x",
        Nutrients::new(66.0, 12.0, 1.0, 2.0),
    ),
];

/// Build the catalog a fresh install starts with.
///
/// Seed ids are fixed (not generated) so meal plans and recipes persisted
/// against a default catalog survive reinstalls.
#[must_use]
pub fn default_catalog() -> Catalog {
    let now = Utc::now();
    let mut catalog = Catalog::new();
    for &(id, name, quantity, nutrients) in SEED_FOODS {
        let food = Food {
            id: id.to_owned(),
            name: name.to_owned(),
            quantity: quantity.to_owned(),
            nutrients,
            kind: FoodKind::Basic,
            created_at: now,
        };
        // seed ids are distinct by construction
        let _ = catalog.add(food);
    }
    catalog
}
