//! # Fan Design Pipeline
//!
//! [`compute`] runs every design stage in order and returns one immutable
//! [`DesignResult`]. Each stage sees only the input and the results of
//! earlier stages:
//!
//! ```text
//! air → specific speed → aero → blades → stress → power → drivetrain
//!     → casing → curve → cost → noise → advice → geometry → scripts
//! ```
//!
//! The pipeline is total: zero, negative, or extreme inputs produce guarded
//! fallback values and warning classifications, never an error.
//!
//! ## Example
//!
//! ```rust
//! use fan_core::{design, FanInput};
//!
//! let result = design(&FanInput::default());
//! assert!(result.aero.tip_speed_status.is_ok());
//! assert!((6..=12).contains(&result.blades.count));
//!
//! let json = serde_json::to_string(&result.summary()).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{
    advisor, aero, air, blades, casing, cost, drivetrain, noise, performance, power, specific_speed, stress,
    AeroResult, AirProperties, BladeResult, CasingResult, CostResult, DesignAdvice, DrivetrainResult,
    MotorLoadStatus, NoiseResult, PerformanceCurvePoint, PowerResult, SafetyStatus, SolidityStatus,
    SpecificSpeedResult, StressResult,
};
use crate::catalogs::{MaterialCatalog, ProfileCatalog};
use crate::geometry::ScriptGeometry;
use crate::inputs::FanInput;
use crate::scripts::ScriptSet;

/// Complete design for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// The input the design was computed from
    pub input: FanInput,
    pub air: AirProperties,
    pub specific_speed: SpecificSpeedResult,
    pub aero: AeroResult,
    pub blades: BladeResult,
    pub stress: StressResult,
    pub power: PowerResult,
    pub drivetrain: DrivetrainResult,
    pub casing: CasingResult,
    /// Nine points at 40-120% of rated flow
    pub curve: Vec<PerformanceCurvePoint>,
    pub cost: CostResult,
    pub noise: NoiseResult,
    pub advice: DesignAdvice,
    /// Resolved geometry the scripts were rendered from
    pub geometry: ScriptGeometry,
    pub scripts: ScriptSet,
}

/// Headline figures kept with each history record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub flow_rate_cfm: f64,
    pub static_pressure_pa: f64,
    pub rpm: f64,
    pub brake_power_hp: f64,
    pub efficiency_percent: f64,
    pub impeller_diameter_mm: f64,
}

impl DesignResult {
    /// Headline figures for the history log
    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            flow_rate_cfm: self.input.flow_rate_cfm,
            static_pressure_pa: self.input.static_pressure_pa,
            rpm: self.input.rpm,
            brake_power_hp: self.power.brake_power_hp,
            efficiency_percent: self.aero.efficiency_percent(),
            impeller_diameter_mm: self.aero.outer_diameter_mm,
        }
    }

    /// The curve point at 100% flow
    pub fn design_point(&self) -> Option<&PerformanceCurvePoint> {
        self.curve.iter().find(|p| p.percent == 100)
    }

    /// Whether every classification is in its normal band
    pub fn all_ok(&self) -> bool {
        self.air.altitude_status.is_ok()
            && self.aero.tip_speed_status.is_ok()
            && self.blades.solidity_status == SolidityStatus::Good
            && self.stress.status == SafetyStatus::Safe
            && self.power.motor_status == MotorLoadStatus::Ok
    }
}

/// Run the full design pipeline against the given catalogs.
pub fn compute(input: &FanInput, materials: &MaterialCatalog, profiles: &ProfileCatalog) -> DesignResult {
    let material = materials.get(input.material);

    let air = air::calculate(input.temperature_f, input.altitude_ft);
    let density = air.design_density_kgm3();
    debug!(density_kgm3 = air.density_kgm3, status = %air.altitude_status, "air properties");

    let specific_speed = specific_speed::calculate(input.flow_rate_cfm, input.static_pressure_pa, input.rpm);
    debug!(ns = specific_speed.specific_speed, family = %specific_speed.recommended_family, "specific speed");

    let aero = aero::calculate(input, density);
    debug!(
        tip_speed_ms = aero.tip_speed_ms,
        d2_mm = aero.outer_diameter_mm,
        efficiency = aero.efficiency,
        "aerodynamic sizing"
    );

    let blades = blades::calculate(input.outlet_angle_deg, aero.outer_diameter_mm, aero.inlet_diameter_mm);
    debug!(count = blades.count, solidity = blades.solidity, "blade count");

    let stress = stress::calculate(material, aero.tip_speed_ms);
    debug!(safety_factor = stress.safety_factor, status = %stress.status, "impeller stress");

    let power = power::calculate(
        input.flow_rate_cfm,
        input.static_pressure_pa,
        input.rpm,
        aero.efficiency,
        input.motor_rating_hp,
    );
    debug!(brake_hp = power.brake_power_hp, load_percent = power.motor_load_percent, "power");

    let drivetrain = drivetrain::calculate(power.running_torque_nm);
    debug!(shaft_mm = drivetrain.shaft_diameter_mm, bearing = %drivetrain.bearing, "drivetrain");

    let casing = casing::calculate(
        input.flow_rate_cfm,
        aero.tip_speed_ms,
        aero.outer_diameter_mm,
        aero.inlet_width_mm,
    );
    debug!(area_mm2 = casing.discharge_area_mm2, "casing");

    let curve = performance::generate(input.flow_rate_cfm, input.static_pressure_pa, aero.efficiency);

    let cost = cost::calculate(
        material,
        aero.outer_diameter_m(),
        aero.hub_diameter_m(),
        aero.outlet_width_m(),
        blades.count,
        input.static_pressure_pa,
    );
    debug!(total_cost = cost.total_cost, "cost");

    let noise = noise::calculate(power.shaft_power_w, input.static_pressure_pa, aero.tip_speed_ms);
    let advice = advisor::advise(input, profiles);

    let geometry = ScriptGeometry::resolve(input, &aero, &blades, &drivetrain, &casing);
    let scripts = ScriptSet::generate(&geometry);
    debug!(banner = %geometry.parameter_banner(), "scripts generated");

    DesignResult {
        input: *input,
        air,
        specific_speed,
        aero,
        blades,
        stress,
        power,
        drivetrain,
        casing,
        curve,
        cost,
        noise,
        advice,
        geometry,
        scripts,
    }
}

/// Run the full design pipeline against the standard catalogs.
pub fn design(input: &FanInput) -> DesignResult {
    compute(input, &MaterialCatalog::STANDARD, &ProfileCatalog::STANDARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_design() {
        let result = design(&FanInput::default());
        assert!((result.aero.outer_diameter_mm - 539.08).abs() < 0.05);
        assert_eq!(result.blades.count, 8);
        assert_eq!(result.drivetrain.shaft_diameter_mm, 20.0);
        assert_eq!(result.curve.len(), 9);
        assert_eq!(result.geometry.blade_count, result.blades.count);
    }

    #[test]
    fn test_summary() {
        let result = design(&FanInput::default());
        let summary = result.summary();
        assert_eq!(summary.flow_rate_cfm, 5000.0);
        assert_eq!(summary.rpm, 1750.0);
        assert_eq!(summary.brake_power_hp, result.power.brake_power_hp);
        assert!((summary.efficiency_percent - 95.39).abs() < 0.01);
        assert_eq!(summary.impeller_diameter_mm, result.aero.outer_diameter_mm);
    }

    #[test]
    fn test_not_all_ok_at_default() {
        // Default motor is oversized and solidity is low
        assert!(!design(&FanInput::default()).all_ok());
    }

    #[test]
    fn test_result_serializes() {
        let result = design(&FanInput::default());
        let json = serde_json::to_string(&result).unwrap();
        let back: DesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scripts, result.scripts);
        assert_eq!(back.blades.count, result.blades.count);
    }
}
