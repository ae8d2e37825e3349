//! # Power, Motor & Electrical Sizing
//!
//! Air power from the duty point, brake power through the static efficiency,
//! then motor load against the installed rating and a catalog motor
//! suggestion with 15% headroom.
//!
//! ```text
//! air HP   = Q[CFM] · P[in.wg] / 6356
//! brake HP = air HP / η
//! T        = 9550 · kW / N            [N·m]
//! ```
//!
//! Electrical figures use the 1.25 A/HP rule of thumb and a 6× direct-on-line
//! inrush.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalogs::standard_sizes::{standard_motor_rating, MOTOR_RATINGS_HP};
use crate::units::{round_to, Horsepower, InchesWater, Kilowatts, Pascals, Watts};

/// Headroom applied to brake power when picking a catalog motor
pub const MOTOR_SERVICE_FACTOR: f64 = 1.15;

/// Full-load current estimate per horsepower (A/HP)
pub const AMPS_PER_HP: f64 = 1.25;

/// Direct-on-line starting current multiple
pub const DOL_STARTING_MULTIPLE: f64 = 6.0;

/// Starting torque multiple of running torque
pub const STARTING_TORQUE_MULTIPLE: f64 = 1.5;

/// Fan law constant for air horsepower (CFM·in.wg per HP)
const AIR_HP_CONSTANT: f64 = 6356.0;

/// Installed motor load classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorLoadStatus {
    Ok,
    /// Load > 100%
    Overloaded,
    /// Load > 85%
    HighLoad,
    /// Load < 50%
    Oversized,
}

impl MotorLoadStatus {
    pub fn classify(load_percent: f64) -> Self {
        if load_percent > 100.0 {
            MotorLoadStatus::Overloaded
        } else if load_percent > 85.0 {
            MotorLoadStatus::HighLoad
        } else if load_percent < 50.0 {
            MotorLoadStatus::Oversized
        } else {
            MotorLoadStatus::Ok
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MotorLoadStatus::Ok => "OK",
            MotorLoadStatus::Overloaded => "OVERLOADED",
            MotorLoadStatus::HighLoad => "Warning: High Load",
            MotorLoadStatus::Oversized => "Oversized",
        }
    }
}

impl std::fmt::Display for MotorLoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Power, motor and electrical results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerResult {
    // === Power ===
    /// Air power (HP)
    pub air_power_hp: f64,
    /// Brake power at the shaft (HP)
    pub brake_power_hp: f64,
    /// Brake power (kW)
    pub brake_power_kw: f64,
    /// Brake power (W)
    pub shaft_power_w: f64,
    /// Running torque at design speed (N·m)
    pub running_torque_nm: f64,

    // === Installed Motor ===
    /// Brake power as a share of the installed rating (%)
    pub motor_load_percent: f64,
    pub motor_status: MotorLoadStatus,

    // === Suggested Motor ===
    /// Smallest catalog motor ≥ 1.15 × brake power; `None` above 300 HP
    pub suggested_motor_hp: Option<f64>,
    /// Full-load amps of the suggested motor
    pub suggested_motor_amps: Option<f64>,

    // === Electrical ===
    /// Estimated running current (A), one decimal
    pub running_amps: f64,
    /// Direct-on-line starting current (A), one decimal
    pub starting_amps: f64,
    /// Starting torque (N·m), one decimal
    pub starting_torque_nm: f64,
}

impl PowerResult {
    /// Suggested motor as display text, `">300"` when out of catalog
    pub fn suggested_motor_label(&self) -> String {
        match self.suggested_motor_hp {
            Some(hp) => format!("{hp}"),
            None => format!(">{}", MOTOR_RATINGS_HP[MOTOR_RATINGS_HP.len() - 1]),
        }
    }
}

/// Size power and motor for the duty point.
///
/// `efficiency` is the static efficiency fraction from the aero stage.
pub fn calculate(
    flow_cfm: f64,
    static_pressure_pa: f64,
    rpm: f64,
    efficiency: f64,
    motor_rating_hp: f64,
) -> PowerResult {
    let p_inwg: InchesWater = Pascals(static_pressure_pa).into();
    let air_power_hp = flow_cfm * p_inwg.value() / AIR_HP_CONSTANT;
    let brake = Horsepower(air_power_hp / if efficiency > 0.0 { efficiency } else { 1.0 });
    let brake_kw: Kilowatts = brake.into();
    let shaft_w: Watts = brake.into();

    let speed = if rpm > 0.0 { rpm } else { 1.0 };
    let running_torque_nm = 9550.0 * brake_kw.value() / speed;

    let motor_load_percent = if motor_rating_hp > 0.0 {
        brake.value() / motor_rating_hp * 100.0
    } else {
        0.0
    };
    let motor_status = MotorLoadStatus::classify(motor_load_percent);
    if matches!(motor_status, MotorLoadStatus::Overloaded | MotorLoadStatus::HighLoad) {
        warn!(motor_load_percent, motor_rating_hp, "installed motor is heavily loaded");
    }

    let suggested_motor_hp = standard_motor_rating(brake.value() * MOTOR_SERVICE_FACTOR);
    let suggested_motor_amps = suggested_motor_hp.map(|hp| hp * AMPS_PER_HP);

    let running_amps = round_to(brake.value() * AMPS_PER_HP, 1);
    let starting_amps = round_to(running_amps * DOL_STARTING_MULTIPLE, 1);
    let starting_torque_nm = round_to(running_torque_nm * STARTING_TORQUE_MULTIPLE, 1);

    PowerResult {
        air_power_hp,
        brake_power_hp: brake.value(),
        brake_power_kw: brake_kw.value(),
        shaft_power_w: shaft_w.value(),
        running_torque_nm,
        motor_load_percent,
        motor_status,
        suggested_motor_hp,
        suggested_motor_amps,
        running_amps,
        starting_amps,
        starting_torque_nm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESIGN_EFFICIENCY: f64 = 0.953876;

    #[test]
    fn test_design_point() {
        let result = calculate(5000.0, 1000.0, 1750.0, DESIGN_EFFICIENCY, 10.0);
        assert!((result.air_power_hp - 3.1582).abs() < 1e-3);
        assert!((result.brake_power_hp - 3.3109).abs() < 1e-3);
        assert!((result.brake_power_kw - 2.4689).abs() < 1e-3);
        assert!((result.running_torque_nm - 13.473).abs() < 1e-2);
        assert!((result.motor_load_percent - 33.11).abs() < 1e-2);
        assert_eq!(result.motor_status, MotorLoadStatus::Oversized);
        // 3.311 × 1.15 = 3.81 -> 5 HP
        assert_eq!(result.suggested_motor_hp, Some(5.0));
        assert_eq!(result.suggested_motor_amps, Some(6.25));
        assert_eq!(result.running_amps, 4.1);
        assert_eq!(result.starting_amps, 24.6);
        assert_eq!(result.starting_torque_nm, 20.2);
    }

    #[test]
    fn test_load_classification() {
        assert_eq!(MotorLoadStatus::classify(100.0), MotorLoadStatus::HighLoad);
        assert_eq!(MotorLoadStatus::classify(100.1), MotorLoadStatus::Overloaded);
        assert_eq!(MotorLoadStatus::classify(85.0), MotorLoadStatus::Ok);
        assert_eq!(MotorLoadStatus::classify(50.0), MotorLoadStatus::Ok);
        assert_eq!(MotorLoadStatus::classify(49.9), MotorLoadStatus::Oversized);
    }

    #[test]
    fn test_out_of_catalog_motor() {
        let result = calculate(500_000.0, 5000.0, 1750.0, 0.8, 10.0);
        assert_eq!(result.suggested_motor_hp, None);
        assert_eq!(result.suggested_motor_amps, None);
        assert_eq!(result.suggested_motor_label(), ">300");
        assert_eq!(result.motor_status, MotorLoadStatus::Overloaded);
    }

    #[test]
    fn test_guards() {
        let result = calculate(5000.0, 1000.0, 0.0, 0.0, 0.0);
        // η ≤ 0 divides by 1, rpm 0 divides by 1
        assert!((result.brake_power_hp - result.air_power_hp).abs() < 1e-12);
        assert!((result.running_torque_nm - 9550.0 * result.brake_power_kw).abs() < 1e-9);
        assert_eq!(result.motor_load_percent, 0.0);
        assert!(result.starting_torque_nm.is_finite());
    }
}
