//! Standard Component Sizes
//!
//! Discrete catalogs the drivetrain and motor sizing snap to: standard shaft
//! diameters, NEMA-style motor ratings, and parallel key sections.

use serde::{Deserialize, Serialize};

/// Standard shaft diameters (mm), ascending
pub const SHAFT_DIAMETERS_MM: [f64; 19] = [
    20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0,
    100.0, 110.0, 120.0,
];

/// Standard motor ratings (HP), ascending
pub const MOTOR_RATINGS_HP: [f64; 24] = [
    0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0,
    75.0, 100.0, 125.0, 150.0, 200.0, 250.0, 300.0,
];

/// Parallel key cross-section (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySection {
    /// Key width (mm)
    pub width_mm: f64,
    /// Key height (mm)
    pub height_mm: f64,
}

/// Key section used below the first band threshold
pub const SMALLEST_KEY: KeySection = KeySection {
    width_mm: 6.0,
    height_mm: 6.0,
};

/// Key bands: a shaft strictly larger than the threshold (mm) takes the
/// section. Ascending; the last matching band wins.
pub const KEY_BANDS: [(f64, KeySection); 9] = [
    (22.0, KeySection { width_mm: 8.0, height_mm: 7.0 }),
    (30.0, KeySection { width_mm: 10.0, height_mm: 8.0 }),
    (38.0, KeySection { width_mm: 12.0, height_mm: 8.0 }),
    (44.0, KeySection { width_mm: 14.0, height_mm: 9.0 }),
    (50.0, KeySection { width_mm: 16.0, height_mm: 10.0 }),
    (58.0, KeySection { width_mm: 18.0, height_mm: 11.0 }),
    (65.0, KeySection { width_mm: 20.0, height_mm: 12.0 }),
    (75.0, KeySection { width_mm: 22.0, height_mm: 14.0 }),
    (85.0, KeySection { width_mm: 25.0, height_mm: 14.0 }),
];

/// Smallest standard shaft at or above `required_mm`, or the ceiling of the
/// requirement when it exceeds the catalog.
pub fn standard_shaft_diameter(required_mm: f64) -> f64 {
    SHAFT_DIAMETERS_MM
        .iter()
        .copied()
        .find(|&d| d >= required_mm)
        .unwrap_or_else(|| required_mm.ceil())
}

/// Smallest standard motor rating at or above `required_hp`, if any
pub fn standard_motor_rating(required_hp: f64) -> Option<f64> {
    MOTOR_RATINGS_HP.iter().copied().find(|&hp| hp >= required_hp)
}

/// Key section for a standard shaft diameter
pub fn key_for_shaft(shaft_mm: f64) -> KeySection {
    KEY_BANDS
        .iter()
        .rev()
        .find(|(threshold, _)| shaft_mm > *threshold)
        .map(|(_, key)| *key)
        .unwrap_or(SMALLEST_KEY)
}
