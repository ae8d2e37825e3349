//! # Specific Speed
//!
//! US specific speed `Ns = N·√Q / P^0.75` (RPM, CFM, in.wg) and the blade
//! family it usually calls for. The classification is advisory; sizing always
//! follows the blade type on the input.

use serde::{Deserialize, Serialize};

use crate::units::{InchesWater, Pascals};

/// Floor for the pressure term `P^0.75` when it is zero or non-finite
const PRESSURE_TERM_FLOOR: f64 = 0.001;

/// Blade family suggested by specific speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpellerFamily {
    /// Ns < 5000
    Radial,
    /// 5000 ≤ Ns < 15000
    BackwardInclined,
    /// 15000 ≤ Ns < 30000
    AirfoilBackward,
    /// Ns ≥ 30000
    ForwardCurved,
}

impl ImpellerFamily {
    /// Classify a specific speed value
    pub fn classify(ns: f64) -> Self {
        if ns < 5000.0 {
            ImpellerFamily::Radial
        } else if ns < 15000.0 {
            ImpellerFamily::BackwardInclined
        } else if ns < 30000.0 {
            ImpellerFamily::AirfoilBackward
        } else {
            ImpellerFamily::ForwardCurved
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImpellerFamily::Radial => "Radial Blades (Low Flow, High Pressure)",
            ImpellerFamily::BackwardInclined => "Backward Inclined/Curved",
            ImpellerFamily::AirfoilBackward => "Airfoil Backward Curved",
            ImpellerFamily::ForwardCurved => "Forward Curved (High Flow, Low Pressure)",
        }
    }
}

impl std::fmt::Display for ImpellerFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Specific speed and suggested family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecificSpeedResult {
    /// US specific speed (RPM·CFM^0.5 / in.wg^0.75)
    pub specific_speed: f64,
    /// Suggested impeller family
    pub recommended_family: ImpellerFamily,
}

/// Compute specific speed from flow (CFM), static pressure (Pa) and speed (RPM).
pub fn calculate(flow_cfm: f64, static_pressure_pa: f64, rpm: f64) -> SpecificSpeedResult {
    let p_inwg: InchesWater = Pascals(static_pressure_pa).into();
    let term = p_inwg.value().powf(0.75);
    let term = if term == 0.0 || !term.is_finite() {
        PRESSURE_TERM_FLOOR
    } else {
        term
    };

    let specific_speed = rpm * flow_cfm.max(0.0).sqrt() / term;

    SpecificSpeedResult {
        specific_speed,
        recommended_family: ImpellerFamily::classify(specific_speed),
    }
}
