//! # Shaft, Key & Bearing Sizing
//!
//! Solid shaft sized for combined bending and torsion at a 1.5 service factor:
//!
//! ```text
//! Td  = 1.5 · T
//! Teq = √((1.5·Td)² + Td²)
//! d   = ∛(16·Teq / (π·τ))        τ = 40 MPa
//! ```
//!
//! The computed diameter snaps up to a standard size; the parallel key and
//! deep-groove bearing follow from the standard diameter.

use serde::{Deserialize, Serialize};

use crate::catalogs::standard_sizes::{key_for_shaft, standard_shaft_diameter};
use crate::catalogs::KeySection;

/// Allowable shear stress for the shaft (Pa)
pub const ALLOWABLE_SHEAR_PA: f64 = 40e6;

/// Service factor on running torque
pub const SERVICE_FACTOR: f64 = 1.5;

/// Allowable key bearing pressure (MPa)
const KEY_BEARING_PRESSURE_MPA: f64 = 90.0;

/// Drivetrain sizing results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivetrainResult {
    /// Running torque (N·m)
    pub torque_nm: f64,
    /// Design torque 1.5·T (N·m)
    pub design_torque_nm: f64,
    /// Equivalent bending + torsion torque (N·m)
    pub equivalent_torque_nm: f64,
    /// Diameter from the torsion formula (mm)
    pub required_shaft_diameter_mm: f64,
    /// Selected standard shaft diameter (mm)
    pub shaft_diameter_mm: f64,
    /// Parallel key section for the standard shaft
    pub key: KeySection,
    /// Key length (mm)
    pub key_length_mm: f64,
    /// Deep-groove bearing series, e.g. "6304"
    pub bearing: String,
}

/// Bearing designation for a shaft: `63` followed by the bore code ⌊d/5⌋.
pub fn bearing_designation(shaft_diameter_mm: f64) -> String {
    let code = (shaft_diameter_mm / 5.0).floor().max(0.0) as u32;
    format!("63{code:02}")
}

/// Size shaft, key, and bearing for running torque `torque_nm` (N·m).
pub fn calculate(torque_nm: f64) -> DrivetrainResult {
    let design_torque_nm = SERVICE_FACTOR * torque_nm;
    let equivalent_torque_nm = ((SERVICE_FACTOR * design_torque_nm).powi(2) + design_torque_nm.powi(2)).sqrt();

    let required_shaft_diameter_mm =
        (16.0 * equivalent_torque_nm / (std::f64::consts::PI * ALLOWABLE_SHEAR_PA)).cbrt() * 1000.0;
    let shaft_diameter_mm = standard_shaft_diameter(required_shaft_diameter_mm);

    let key = key_for_shaft(shaft_diameter_mm);
    let bearing_length =
        (2000.0 * torque_nm / (shaft_diameter_mm * key.width_mm * KEY_BEARING_PRESSURE_MPA)).round();
    let key_length_mm = key.width_mm.max(bearing_length);

    DrivetrainResult {
        torque_nm,
        design_torque_nm,
        equivalent_torque_nm,
        required_shaft_diameter_mm,
        shaft_diameter_mm,
        key,
        key_length_mm,
        bearing: bearing_designation(shaft_diameter_mm),
    }
}
