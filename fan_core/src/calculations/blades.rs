//! # Blade Count & Solidity
//!
//! Empirical blade count `Z = 8.5·sin(β2)·D2/(D2−D1)`, rounded and clamped to
//! 6..=12, and the pitch-to-span solidity check.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fewest blades the sizing will return
pub const MIN_BLADES: u32 = 6;

/// Most blades the sizing will return
pub const MAX_BLADES: u32 = 12;

/// Raw count used when the blade span is zero or negative
const DEGENERATE_RAW_COUNT: f64 = 10.0;

/// Solidity classification against the 1.8-2.5 band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidityStatus {
    Good,
    TooMany,
    TooFew,
}

impl SolidityStatus {
    pub fn classify(solidity: f64) -> Self {
        if solidity > 2.5 {
            SolidityStatus::TooMany
        } else if solidity < 1.8 {
            SolidityStatus::TooFew
        } else {
            SolidityStatus::Good
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SolidityStatus::Good => "Good (1.8-2.5)",
            SolidityStatus::TooMany => "Too many blades",
            SolidityStatus::TooFew => "Too few blades",
        }
    }
}

impl std::fmt::Display for SolidityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Blade count and solidity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BladeResult {
    /// Unrounded correlation value
    pub raw_count: f64,
    /// Selected blade count Z (6..=12)
    pub count: u32,
    /// Blade pitch at the outer diameter (mm)
    pub pitch_mm: f64,
    /// Pitch divided by radial blade span
    pub solidity: f64,
    pub solidity_status: SolidityStatus,
}

/// Round half away from zero and clamp into the blade count range.
///
/// Non-finite raw values clamp to the nearer bound (NaN to the minimum).
pub fn clamp_count(raw: f64) -> u32 {
    let rounded = raw.round();
    if rounded.is_nan() || rounded <= MIN_BLADES as f64 {
        MIN_BLADES
    } else if rounded >= MAX_BLADES as f64 {
        MAX_BLADES
    } else {
        rounded as u32
    }
}

/// Blade count and solidity from outlet angle (deg) and diameters (mm).
pub fn calculate(outlet_angle_deg: f64, outer_diameter_mm: f64, inlet_diameter_mm: f64) -> BladeResult {
    let span = outer_diameter_mm - inlet_diameter_mm;
    let raw_count = if span > 0.0 {
        8.5 * outlet_angle_deg.to_radians().sin() * outer_diameter_mm / span
    } else {
        DEGENERATE_RAW_COUNT
    };
    let count = clamp_count(raw_count);

    // Pitch of 1 for a zero diameter keeps the ratio finite
    let pitch_mm = if outer_diameter_mm > 0.0 {
        std::f64::consts::PI * outer_diameter_mm / count as f64
    } else {
        1.0
    };
    let radial_span = span / 2.0;
    let solidity = if radial_span > 0.0 { pitch_mm / radial_span } else { 0.0 };
    let solidity_status = SolidityStatus::classify(solidity);

    if solidity_status != SolidityStatus::Good {
        warn!(solidity, count, status = %solidity_status, "blade solidity outside 1.8-2.5");
    }

    BladeResult {
        raw_count,
        count,
        pitch_mm,
        solidity,
        solidity_status,
    }
}
