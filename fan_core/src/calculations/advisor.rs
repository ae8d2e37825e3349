//! # Design Advisor
//!
//! Suggested blade angles for the selected application profile, and a helper
//! that applies a profile's defaults to an input.
//!
//! The outlet angle comes from the profile unless the chosen blade type pins
//! it (radial blades are 90°, forward-curved 145°). The inlet angle is the
//! relative flow angle at the eye of a rough first-pass impeller, plus 3° of
//! incidence:
//!
//! ```text
//! U2 = √(2P/ρ)       D2 = 60·U2/(πN)     D1 = 0.5·D2     b1 = 0.25·D1
//! Cm1 = Q/(π·D1·b1)  U1 = π·D1·N/60
//! β1 = atan(Cm1/U1) + 3°, clamped to 15..=60
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fan_core::calculations::advisor;
//! use fan_core::catalogs::{ApplicationKey, ProfileCatalog};
//! use fan_core::FanInput;
//!
//! let input = FanInput {
//!     application: ApplicationKey::HighPressure,
//!     ..FanInput::default()
//! };
//! let tuned = advisor::apply_profile(&input, &ProfileCatalog::STANDARD);
//! assert_eq!(tuned.outlet_angle_deg, 90.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalogs::{ApplicationKey, ProfileCatalog};
use crate::inputs::{BladeType, FanInput};
use crate::units::{Cfm, CubicMetersPerSecond};

/// Smallest inlet angle the advisor recommends (deg)
pub const MIN_INLET_ANGLE_DEG: f64 = 15.0;

/// Largest inlet angle the advisor recommends (deg)
pub const MAX_INLET_ANGLE_DEG: f64 = 60.0;

/// Incidence added to the flow angle (deg)
const INCIDENCE_DEG: f64 = 3.0;

/// Density assumed for the first-pass estimate (kg/m³)
const ESTIMATE_DENSITY_KGM3: f64 = 1.2;

/// Recommended settings for the current input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignAdvice {
    /// Profile the advice is based on
    pub application: ApplicationKey,
    /// Profile display label
    pub profile_label: String,
    /// Profile description
    pub profile_description: String,
    /// Blade type the profile recommends
    pub recommended_blade_type: BladeType,
    /// Suggested outlet blade angle β2 (deg)
    pub recommended_outlet_angle_deg: f64,
    /// Suggested inlet blade angle β1 (deg)
    pub recommended_inlet_angle_deg: f64,
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Suggested outlet angle for a profile outlet angle and chosen blade type.
pub fn recommended_outlet_angle(profile_outlet_deg: f64, blade_type: BladeType) -> f64 {
    match blade_type {
        BladeType::Radial => 90.0,
        BladeType::Forward => 145.0,
        BladeType::Backward => profile_outlet_deg,
    }
}

/// Suggested inlet angle (whole degrees) for a duty point.
///
/// Non-positive flow, pressure or speed fall back to 1000 CFM, 500 Pa and
/// 1000 RPM.
pub fn recommended_inlet_angle(flow_cfm: f64, static_pressure_pa: f64, rpm: f64) -> f64 {
    let q_cfm = positive_or(flow_cfm, 1000.0);
    let p = positive_or(static_pressure_pa, 500.0);
    let n = positive_or(rpm, 1000.0);
    let q: CubicMetersPerSecond = Cfm(q_cfm).into();

    let u2 = (2.0 * p / ESTIMATE_DENSITY_KGM3).sqrt();
    let d2 = 60.0 * u2 / (std::f64::consts::PI * n);
    let d1 = 0.5 * d2;
    let b1 = 0.25 * d1;
    let area = std::f64::consts::PI * d1 * b1;

    let cm1 = if area > 0.0 { q.value() / area } else { 10.0 };
    let u1 = std::f64::consts::PI * d1 * n / 60.0;
    let u1 = if u1 == 0.0 { 1.0 } else { u1 };

    let angle = (cm1 / u1).atan().to_degrees() + INCIDENCE_DEG;
    angle.round().clamp(MIN_INLET_ANGLE_DEG, MAX_INLET_ANGLE_DEG)
}

/// Advice for `input` using the profile its application key selects.
pub fn advise(input: &FanInput, profiles: &ProfileCatalog) -> DesignAdvice {
    let profile = profiles.get(input.application);
    DesignAdvice {
        application: profile.key,
        profile_label: profile.label.to_string(),
        profile_description: profile.description.to_string(),
        recommended_blade_type: profile.blade_type,
        recommended_outlet_angle_deg: recommended_outlet_angle(profile.outlet_angle_deg, input.blade_type),
        recommended_inlet_angle_deg: recommended_inlet_angle(
            input.flow_rate_cfm,
            input.static_pressure_pa,
            input.rpm,
        ),
    }
}

/// A copy of `input` with the application profile's blade type and outlet
/// angle, and the recommended inlet angle for its duty point.
pub fn apply_profile(input: &FanInput, profiles: &ProfileCatalog) -> FanInput {
    let profile = profiles.get(input.application);
    FanInput {
        blade_type: profile.blade_type,
        outlet_angle_deg: profile.outlet_angle_deg,
        inlet_angle_deg: recommended_inlet_angle(input.flow_rate_cfm, input.static_pressure_pa, input.rpm),
        ..*input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_override_by_blade_type() {
        assert_eq!(recommended_outlet_angle(35.0, BladeType::Backward), 35.0);
        assert_eq!(recommended_outlet_angle(35.0, BladeType::Radial), 90.0);
        assert_eq!(recommended_outlet_angle(35.0, BladeType::Forward), 145.0);
    }

    #[test]
    fn test_inlet_angle_mid_range() {
        // Cm1 ≈ 12.11 m/s, U1 ≈ 20.41 m/s -> 30.7° + 3°
        assert_eq!(recommended_inlet_angle(1000.0, 1000.0, 1750.0), 34.0);
    }

    #[test]
    fn test_inlet_angle_clamped() {
        assert_eq!(recommended_inlet_angle(5000.0, 1000.0, 1750.0), 60.0);
        assert_eq!(recommended_inlet_angle(10.0, 1000.0, 1750.0), 15.0);
    }

    #[test]
    fn test_inlet_angle_fallbacks() {
        assert_eq!(
            recommended_inlet_angle(0.0, -5.0, 0.0),
            recommended_inlet_angle(1000.0, 500.0, 1000.0)
        );
    }

    #[test]
    fn test_advise_uses_input_application() {
        let input = FanInput {
            application: ApplicationKey::Transport,
            blade_type: BladeType::Backward,
            ..FanInput::default()
        };
        let advice = advise(&input, &ProfileCatalog::STANDARD);
        assert_eq!(advice.profile_label, "High Velocity / Transport");
        assert_eq!(advice.recommended_blade_type, BladeType::Radial);
        assert_eq!(advice.recommended_outlet_angle_deg, 90.0);
    }

    #[test]
    fn test_apply_profile() {
        let input = FanInput {
            application: ApplicationKey::HighFlow,
            flow_rate_cfm: 1000.0,
            ..FanInput::default()
        };
        let tuned = apply_profile(&input, &ProfileCatalog::STANDARD);
        assert_eq!(tuned.blade_type, BladeType::Forward);
        assert_eq!(tuned.outlet_angle_deg, 145.0);
        assert_eq!(tuned.inlet_angle_deg, 34.0);
        assert_eq!(tuned.flow_rate_cfm, 1000.0);
        assert_eq!(tuned.material, input.material);
    }
}
