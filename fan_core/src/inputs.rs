//! # Design Inputs
//!
//! The immutable input value the design engine consumes. Parsing raw form
//! text into numbers is the presentation layer's job; by the time a
//! [`FanInput`] exists every field is a number (possibly zero or negative),
//! and the engine defends against both.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "flow_rate_cfm": 5000.0,
//!   "static_pressure_pa": 1000.0,
//!   "rpm": 1750.0,
//!   "motor_rating_hp": 10.0,
//!   "temperature_f": 70.0,
//!   "altitude_ft": 0.0,
//!   "blade_type": "Backward",
//!   "material": "Steel",
//!   "discharge_area_ft2": 2.5,
//!   "outlet_angle_deg": 35.0,
//!   "inlet_angle_deg": 25.0,
//!   "application": "General"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalogs::{ApplicationKey, MaterialKey};
use crate::errors::{CalcError, CalcResult};

/// Impeller blade family selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BladeType {
    /// Radial (straight) blades - industrial, self-cleaning
    Radial,
    /// Backward curved/inclined blades - HVAC, best static efficiency
    #[default]
    Backward,
    /// Forward curved blades - compact unitary equipment
    Forward,
}

impl BladeType {
    /// All blade types for UI selection
    pub const ALL: [BladeType; 3] = [BladeType::Radial, BladeType::Backward, BladeType::Forward];

    /// Inlet-to-outlet diameter ratio D1/D2 used for this blade family
    pub fn hub_ratio(&self) -> f64 {
        match self {
            BladeType::Radial => 0.35,
            BladeType::Backward => 0.40,
            BladeType::Forward => 0.45,
        }
    }

    /// Static efficiency modifier relative to backward-curved blades
    pub fn efficiency_modifier(&self) -> f64 {
        match self {
            BladeType::Radial => -0.10,
            BladeType::Backward => 0.0,
            BladeType::Forward => -0.15,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "RADIAL" | "R" => Ok(BladeType::Radial),
            "BACKWARD" | "BACKWARD CURVED" | "BACKWARD INCLINED" | "B" => Ok(BladeType::Backward),
            "FORWARD" | "FORWARD CURVED" | "F" => Ok(BladeType::Forward),
            _ => Err(CalcError::invalid_input(
                "blade_type",
                s,
                "Expected Radial, Backward, or Forward",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BladeType::Radial => "Radial (Industrial)",
            BladeType::Backward => "Backward Curved (HVAC)",
            BladeType::Forward => "Forward Curved (Unitary)",
        }
    }
}

impl std::fmt::Display for BladeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Operating conditions and design choices for one fan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanInput {
    /// Volumetric flow rate (CFM)
    pub flow_rate_cfm: f64,

    /// Static pressure rise (Pa)
    pub static_pressure_pa: f64,

    /// Impeller speed (RPM)
    pub rpm: f64,

    /// Nameplate rating of the installed motor (HP)
    pub motor_rating_hp: f64,

    /// Ambient air temperature (°F)
    pub temperature_f: f64,

    /// Site altitude (ft)
    pub altitude_ft: f64,

    /// Blade family
    pub blade_type: BladeType,

    /// Construction material
    pub material: MaterialKey,

    /// User's discharge area estimate (ft²). Informational only.
    pub discharge_area_ft2: f64,

    /// Outlet blade angle β2 (deg)
    pub outlet_angle_deg: f64,

    /// Inlet blade angle β1 (deg)
    pub inlet_angle_deg: f64,

    /// Application profile
    pub application: ApplicationKey,
}

impl Default for FanInput {
    fn default() -> Self {
        FanInput {
            flow_rate_cfm: 5000.0,
            static_pressure_pa: 1000.0,
            rpm: 1750.0,
            motor_rating_hp: 10.0,
            temperature_f: 70.0,
            altitude_ft: 0.0,
            blade_type: BladeType::Backward,
            material: MaterialKey::Steel,
            discharge_area_ft2: 2.5,
            outlet_angle_deg: 35.0,
            inlet_angle_deg: 25.0,
            application: ApplicationKey::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blade_type_tables() {
        assert_eq!(BladeType::Radial.hub_ratio(), 0.35);
        assert_eq!(BladeType::Forward.hub_ratio(), 0.45);
        assert_eq!(BladeType::Backward.efficiency_modifier(), 0.0);
        assert_eq!(BladeType::Forward.efficiency_modifier(), -0.15);
    }

    #[test]
    fn test_blade_type_parse() {
        assert_eq!(BladeType::from_str_flexible(" radial ").unwrap(), BladeType::Radial);
        assert_eq!(BladeType::from_str_flexible("Forward Curved").unwrap(), BladeType::Forward);
        assert!(BladeType::from_str_flexible("Airfoil").is_err());
    }

    #[test]
    fn test_serialization() {
        let input = FanInput::default();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"blade_type\": \"Backward\""));
        assert!(json.contains("\"application\": \"General\""));

        let roundtrip: FanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
