//! # Impeller Stress
//!
//! Rotating-disk hoop stress at the tip plus a 10% bending allowance:
//!
//! ```text
//! σc = ρm · U² · (1 + ν) / 3
//! σ  = σc + 0.1·σc
//! SF = Fy / σ
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalogs::MaterialProperties;

/// Safety factor reported when there is no stress at all
pub const UNCONSTRAINED_SAFETY_FACTOR: f64 = 999.0;

/// Safety factor classification. All thresholds are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyStatus {
    /// SF > 2.0
    Safe,
    /// SF > 1.5
    Acceptable,
    /// SF > 1.2
    Marginal,
    Unsafe,
}

impl SafetyStatus {
    pub fn classify(safety_factor: f64) -> Self {
        if safety_factor > 2.0 {
            SafetyStatus::Safe
        } else if safety_factor > 1.5 {
            SafetyStatus::Acceptable
        } else if safety_factor > 1.2 {
            SafetyStatus::Marginal
        } else {
            SafetyStatus::Unsafe
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE",
            SafetyStatus::Acceptable => "ACCEPTABLE",
            SafetyStatus::Marginal => "MARGINAL",
            SafetyStatus::Unsafe => "UNSAFE",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Impeller stress check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Centrifugal hoop stress (MPa)
    pub centrifugal_stress_mpa: f64,
    /// Bending allowance (MPa)
    pub bending_stress_mpa: f64,
    /// Combined stress (MPa)
    pub total_stress_mpa: f64,
    /// Material yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Yield / combined stress; 999 when unstressed
    pub safety_factor: f64,
    pub status: SafetyStatus,
}

/// Check the impeller material at tip speed `tip_speed_ms`.
pub fn calculate(material: &MaterialProperties, tip_speed_ms: f64) -> StressResult {
    let hoop_pa = material.density_kgm3 * tip_speed_ms.powi(2) * (1.0 + material.poisson) / 3.0;
    let bending_pa = 0.1 * hoop_pa;
    let total_stress_mpa = (hoop_pa + bending_pa) / 1e6;

    let safety_factor = if total_stress_mpa > 0.0 {
        material.yield_mpa / total_stress_mpa
    } else {
        UNCONSTRAINED_SAFETY_FACTOR
    };
    let status = SafetyStatus::classify(safety_factor);

    if matches!(status, SafetyStatus::Marginal | SafetyStatus::Unsafe) {
        warn!(safety_factor, material = %material.key, "impeller stress margin is low");
    }

    StressResult {
        centrifugal_stress_mpa: hoop_pa / 1e6,
        bending_stress_mpa: bending_pa / 1e6,
        total_stress_mpa,
        yield_strength_mpa: material.yield_mpa,
        safety_factor,
        status,
    }
}
