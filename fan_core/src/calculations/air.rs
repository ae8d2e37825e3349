//! # Air Properties
//!
//! Corrects standard air density (0.075 lb/ft³ at 70 °F, sea level) for site
//! temperature and altitude.
//!
//! ```text
//! ρ = 0.075 · 530/(460 + T) · (1 − 6.8756e-6 · alt)^5.2559   [lb/ft³]
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{KgPerM3, LbPerFt3};

/// Altitude above which a motor derating warning is raised (ft)
pub const HIGH_ALTITUDE_FT: f64 = 5000.0;

/// Density used downstream when the corrected value is unusable (kg/m³)
pub const FALLBACK_DENSITY_KGM3: f64 = 1.2;

/// Site altitude classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeStatus {
    Ok,
    /// Above 5000 ft: motor derating should be considered
    HighAltitude,
}

impl AltitudeStatus {
    pub fn message(&self) -> &'static str {
        match self {
            AltitudeStatus::Ok => "OK",
            AltitudeStatus::HighAltitude => "Warning: High altitude - consider motor derating",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AltitudeStatus::Ok)
    }
}

impl std::fmt::Display for AltitudeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Corrected air properties at the fan inlet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirProperties {
    /// Air density (lb/ft³)
    pub density_lbft3: f64,
    /// Air density (kg/m³)
    pub density_kgm3: f64,
    /// Altitude classification
    pub altitude_status: AltitudeStatus,
}

impl AirProperties {
    /// Density for use as a divisor downstream: the corrected value when it is
    /// positive, otherwise [`FALLBACK_DENSITY_KGM3`].
    pub fn design_density_kgm3(&self) -> f64 {
        if self.density_kgm3 > 0.0 {
            self.density_kgm3
        } else {
            FALLBACK_DENSITY_KGM3
        }
    }
}

/// Correct air density for temperature (°F) and altitude (ft).
///
/// Non-finite intermediate results (absolute zero, altitudes beyond the
/// model's range) are reported as zero density.
pub fn calculate(temperature_f: f64, altitude_ft: f64) -> AirProperties {
    let raw = 0.075 * (530.0 / (460.0 + temperature_f)) * (1.0 - 0.0000068756 * altitude_ft).powf(5.2559);
    let density_us = LbPerFt3(if raw.is_finite() { raw } else { 0.0 });
    let density_si: KgPerM3 = density_us.into();

    let altitude_status = if altitude_ft > HIGH_ALTITUDE_FT {
        AltitudeStatus::HighAltitude
    } else {
        AltitudeStatus::Ok
    };

    AirProperties {
        density_lbft3: density_us.value(),
        density_kgm3: density_si.value(),
        altitude_status,
    }
}
