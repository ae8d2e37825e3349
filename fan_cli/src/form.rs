//! Raw text form fields and their coercion into a [`FanInput`].
//!
//! Coercion never fails: numbers that are blank, unparsable or non-finite
//! become `0.0` (the engine guards every zero), and unknown catalog keys keep
//! the base value with a warning.

use clap::Args;
use fan_core::{ApplicationKey, BladeType, CalcResult, FanInput, MaterialKey};
use tracing::warn;

/// Design inputs as typed on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct RawForm {
    /// Flow rate (CFM)
    #[arg(long = "flow", value_name = "CFM", allow_hyphen_values = true)]
    pub flow_rate: Option<String>,

    /// Static pressure (Pa)
    #[arg(long = "pressure", value_name = "PA", allow_hyphen_values = true)]
    pub static_pressure: Option<String>,

    /// Impeller speed (RPM)
    #[arg(long, value_name = "RPM", allow_hyphen_values = true)]
    pub rpm: Option<String>,

    /// Installed motor rating (HP)
    #[arg(long = "motor", value_name = "HP", allow_hyphen_values = true)]
    pub motor_rating: Option<String>,

    /// Ambient temperature (°F)
    #[arg(long = "temperature", value_name = "F", allow_hyphen_values = true)]
    pub temperature: Option<String>,

    /// Site altitude (ft)
    #[arg(long = "altitude", value_name = "FT", allow_hyphen_values = true)]
    pub altitude: Option<String>,

    /// Blade type: Radial, Backward, Forward
    #[arg(long = "blade-type")]
    pub blade_type: Option<String>,

    /// Material key, e.g. Steel, Aluminum_Alloy
    #[arg(long)]
    pub material: Option<String>,

    /// Discharge area estimate (ft²)
    #[arg(long = "area", value_name = "FT2", allow_hyphen_values = true)]
    pub discharge_area: Option<String>,

    /// Outlet blade angle β2 (deg)
    #[arg(long = "outlet-angle", value_name = "DEG", allow_hyphen_values = true)]
    pub outlet_angle: Option<String>,

    /// Inlet blade angle β1 (deg)
    #[arg(long = "inlet-angle", value_name = "DEG", allow_hyphen_values = true)]
    pub inlet_angle: Option<String>,

    /// Application profile, e.g. General, "High Pressure"
    #[arg(long)]
    pub application: Option<String>,
}

/// Trimmed text as a finite number, otherwise `0.0`
pub fn coerce_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn coerce_key<T: Copy>(text: Option<&str>, base: T, field: &str, parse: fn(&str) -> CalcResult<T>) -> T {
    match text {
        None => base,
        Some(text) => parse(text).unwrap_or_else(|e| {
            warn!(field, value = text, error = %e, "unknown key, keeping previous value");
            base
        }),
    }
}

impl RawForm {
    /// Whether any field was given
    pub fn is_empty(&self) -> bool {
        [
            &self.flow_rate,
            &self.static_pressure,
            &self.rpm,
            &self.motor_rating,
            &self.temperature,
            &self.altitude,
            &self.blade_type,
            &self.material,
            &self.discharge_area,
            &self.outlet_angle,
            &self.inlet_angle,
            &self.application,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    /// `base` with every given field overwritten by its coerced value
    pub fn apply(&self, base: &FanInput) -> FanInput {
        let number = |text: &Option<String>, current: f64| text.as_deref().map_or(current, coerce_number);

        FanInput {
            flow_rate_cfm: number(&self.flow_rate, base.flow_rate_cfm),
            static_pressure_pa: number(&self.static_pressure, base.static_pressure_pa),
            rpm: number(&self.rpm, base.rpm),
            motor_rating_hp: number(&self.motor_rating, base.motor_rating_hp),
            temperature_f: number(&self.temperature, base.temperature_f),
            altitude_ft: number(&self.altitude, base.altitude_ft),
            blade_type: coerce_key(
                self.blade_type.as_deref(),
                base.blade_type,
                "blade_type",
                BladeType::from_str_flexible,
            ),
            material: coerce_key(
                self.material.as_deref(),
                base.material,
                "material",
                MaterialKey::from_str_flexible,
            ),
            discharge_area_ft2: number(&self.discharge_area, base.discharge_area_ft2),
            outlet_angle_deg: number(&self.outlet_angle, base.outlet_angle_deg),
            inlet_angle_deg: number(&self.inlet_angle, base.inlet_angle_deg),
            application: coerce_key(
                self.application.as_deref(),
                base.application,
                "application",
                ApplicationKey::from_str_flexible,
            ),
        }
    }
}
