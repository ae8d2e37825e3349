//! # Aerodynamic Sizing
//!
//! Closed-form impeller sizing from the duty point. The chain runs, in order:
//!
//! 1. Pressure coefficient `ψ = 0.0133·β2 + 0.4`
//! 2. Static efficiency `η = max(0.3, 0.52 + 0.12·log10(Q) + mod − |β2−40|·0.002)`
//! 3. Tip speed `U = 1.1·√(2P / (ρ·ψ·η))`
//! 4. Outer diameter `D2 = 60U/(πN)`, inlet `D1 = hub·D2`, hub `Dh = 0.4·D1`
//! 5. Outlet width `b2 = Q/(π·D2·Cm2)` with `Cm2 = 0.25U`
//! 6. Inlet velocity `Cm1 = Q/(π·D1·b2)` and inlet width `b1 = b2·D2/D1`
//!
//! Every division is guarded; a zero speed or flow yields zero geometry, never
//! a fault.
//!
//! ## Example
//!
//! ```rust
//! use fan_core::calculations::aero;
//! use fan_core::FanInput;
//!
//! let result = aero::calculate(&FanInput::default(), 1.2014);
//! assert!(result.tip_speed_status.is_ok());
//! println!("D2 = {:.1} mm", result.outer_diameter_mm);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::inputs::FanInput;
use crate::units::{Cfm, CubicMetersPerSecond, Meters, Millimeters};

/// Tip speed above which the impeller material is likely overstressed (m/s)
pub const TIP_SPEED_LIMIT_MS: f64 = 200.0;

/// Tip speed below which the design is unusually slow (m/s)
pub const TIP_SPEED_LOW_MS: f64 = 25.0;

/// Optimum outlet blade angle for the efficiency correlation (deg)
const OPTIMUM_OUTLET_ANGLE_DEG: f64 = 40.0;

/// Efficiency substituted in the tip speed divisor when the correlation exceeds 1
const OVERUNITY_EFFICIENCY: f64 = 0.85;

/// Tip speed classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipSpeedStatus {
    Ok,
    /// Above 200 m/s
    MaterialLimit,
    /// Below 25 m/s
    LowSpeed,
}

impl TipSpeedStatus {
    pub fn classify(tip_speed_ms: f64) -> Self {
        if tip_speed_ms > TIP_SPEED_LIMIT_MS {
            TipSpeedStatus::MaterialLimit
        } else if tip_speed_ms < TIP_SPEED_LOW_MS {
            TipSpeedStatus::LowSpeed
        } else {
            TipSpeedStatus::Ok
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TipSpeedStatus::Ok => "OK",
            TipSpeedStatus::MaterialLimit => "Warning: > 200 m/s (Material Limit)",
            TipSpeedStatus::LowSpeed => "Note: Low Speed",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, TipSpeedStatus::Ok)
    }
}

impl std::fmt::Display for TipSpeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Inlet meridional velocity classification against the 15-30 m/s band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InletVelocityStatus {
    Ok,
    Low,
    High,
}

impl InletVelocityStatus {
    pub fn classify(velocity_ms: f64) -> Self {
        if velocity_ms < 15.0 {
            InletVelocityStatus::Low
        } else if velocity_ms > 30.0 {
            InletVelocityStatus::High
        } else {
            InletVelocityStatus::Ok
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InletVelocityStatus::Ok => "OK",
            InletVelocityStatus::Low => "Low",
            InletVelocityStatus::High => "High",
        }
    }
}

impl std::fmt::Display for InletVelocityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Aerodynamic sizing results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroResult {
    // === Coefficients ===
    /// Pressure coefficient ψ
    pub pressure_coefficient: f64,

    /// Inlet/outlet diameter ratio D1/D2
    pub hub_ratio: f64,

    /// Static efficiency from the correlation (fraction, floored at 0.3)
    ///
    /// May exceed 1 for very large flows; the tip speed uses 0.85 in that case.
    pub efficiency: f64,

    // === Tip Speed ===
    /// Theoretical tip speed (m/s)
    pub theoretical_tip_speed_ms: f64,

    /// Design tip speed U2 including the 10% margin (m/s)
    pub tip_speed_ms: f64,

    pub tip_speed_status: TipSpeedStatus,

    // === Geometry ===
    /// Impeller outer diameter D2 (mm)
    pub outer_diameter_mm: f64,

    /// Impeller inlet diameter D1 (mm)
    pub inlet_diameter_mm: f64,

    /// Hub diameter Dh (mm)
    pub hub_diameter_mm: f64,

    /// Blade height at outlet b2 (mm)
    pub outlet_width_mm: f64,

    /// Blade height at inlet b1 (mm)
    pub inlet_width_mm: f64,

    // === Velocities ===
    /// Outlet meridional velocity Cm2 (m/s)
    pub outlet_meridional_velocity_ms: f64,

    /// Inlet meridional velocity Cm1 (m/s)
    pub inlet_meridional_velocity_ms: f64,

    pub inlet_velocity_status: InletVelocityStatus,
}

impl AeroResult {
    /// Outer diameter D2 in metres
    pub fn outer_diameter_m(&self) -> f64 {
        Meters::from(Millimeters(self.outer_diameter_mm)).value()
    }

    /// Inlet diameter D1 in metres
    pub fn inlet_diameter_m(&self) -> f64 {
        Meters::from(Millimeters(self.inlet_diameter_mm)).value()
    }

    /// Hub diameter Dh in metres
    pub fn hub_diameter_m(&self) -> f64 {
        Meters::from(Millimeters(self.hub_diameter_mm)).value()
    }

    /// Outlet width b2 in metres
    pub fn outlet_width_m(&self) -> f64 {
        Meters::from(Millimeters(self.outlet_width_mm)).value()
    }

    /// Efficiency as a percentage
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency * 100.0
    }
}

/// Size the impeller for the duty point on `input` at air density `density_kgm3`.
///
/// `density_kgm3` must already be the guarded design density (positive).
pub fn calculate(input: &FanInput, density_kgm3: f64) -> AeroResult {
    let flow: CubicMetersPerSecond = Cfm(input.flow_rate_cfm).into();
    let q = flow.value();
    let beta2 = input.outlet_angle_deg;

    let pressure_coefficient = 0.0133 * beta2 + 0.4;
    let hub_ratio = input.blade_type.hub_ratio();
    let penalty = (beta2 - OPTIMUM_OUTLET_ANGLE_DEG).abs() * 0.002;
    let efficiency = (0.52 + 0.12 * input.flow_rate_cfm.max(1.0).log10()
        + input.blade_type.efficiency_modifier()
        - penalty)
        .max(0.3);
    let efficiency_divisor = if efficiency > 1.0 {
        OVERUNITY_EFFICIENCY
    } else {
        efficiency
    };

    let radicand = 2.0 * input.static_pressure_pa / (density_kgm3 * pressure_coefficient * efficiency_divisor);
    // Also rejects NaN from a zero ψ
    let theoretical_tip_speed_ms = if radicand > 0.0 { radicand.sqrt() } else { 0.0 };
    let tip_speed_ms = 1.1 * theoretical_tip_speed_ms;
    let tip_speed_status = TipSpeedStatus::classify(tip_speed_ms);

    let d2 = if input.rpm > 0.0 {
        60.0 * tip_speed_ms / (std::f64::consts::PI * input.rpm)
    } else {
        0.0
    };
    let d1 = d2 * hub_ratio;
    let dh = 0.4 * d1;

    let cm2 = 0.25 * tip_speed_ms;
    let b2 = if d2 > 0.0 && cm2 > 0.0 {
        q / (std::f64::consts::PI * d2 * cm2)
    } else {
        0.0
    };
    let cm1 = if d1 > 0.0 && b2 > 0.0 {
        q / (std::f64::consts::PI * d1 * b2)
    } else {
        0.0
    };
    let inlet_velocity_status = InletVelocityStatus::classify(cm1);
    let b1 = if d1 > 0.0 { b2 * (d2 / d1) } else { 0.0 };

    if !tip_speed_status.is_ok() {
        warn!(tip_speed_ms, status = %tip_speed_status, "tip speed outside normal range");
    }

    AeroResult {
        pressure_coefficient,
        hub_ratio,
        efficiency,
        theoretical_tip_speed_ms,
        tip_speed_ms,
        tip_speed_status,
        outer_diameter_mm: Millimeters::from(Meters(d2)).value(),
        inlet_diameter_mm: Millimeters::from(Meters(d1)).value(),
        hub_diameter_mm: Millimeters::from(Meters(dh)).value(),
        outlet_width_mm: Millimeters::from(Meters(b2)).value(),
        inlet_width_mm: Millimeters::from(Meters(b1)).value(),
        outlet_meridional_velocity_ms: cm2,
        inlet_meridional_velocity_ms: cm1,
        inlet_velocity_status,
    }
}
