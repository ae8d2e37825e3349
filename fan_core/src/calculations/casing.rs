//! # Casing & Discharge Geometry
//!
//! Volute scroll radii and the rectangular discharge opening. The scroll grows
//! linearly from the cutoff radius by one discharge height over 360°.

use serde::{Deserialize, Serialize};

use crate::units::{Cfm, CubicMetersPerSecond};

/// Discharge opening aspect ratio height/width
pub const DISCHARGE_ASPECT_RATIO: f64 = 1.25;

/// Cutoff clearance as a fraction of D2
pub const CUTOFF_CLEARANCE_RATIO: f64 = 0.07;

/// Discharge velocity as a fraction of tip speed
pub const DISCHARGE_VELOCITY_RATIO: f64 = 0.7;

/// Volute and discharge dimensions (mm unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CasingResult {
    /// Scroll width across the impeller (mm)
    pub volute_width_mm: f64,
    /// Tongue clearance (mm)
    pub cutoff_clearance_mm: f64,
    /// Scroll radius at the tongue (mm)
    pub cutoff_radius_mm: f64,
    /// Mean discharge velocity (m/s)
    pub discharge_velocity_ms: f64,
    /// Discharge area (mm²)
    pub discharge_area_mm2: f64,
    /// Rectangular discharge width (mm)
    pub discharge_width_mm: f64,
    /// Rectangular discharge height (mm)
    pub discharge_height_mm: f64,
    /// Round duct diameter of equal area (mm)
    pub discharge_diameter_mm: f64,
    /// Scroll radius at 0°, 90°, 180°, 270° and 360° (mm)
    pub scroll_radii_mm: [f64; 5],
}

impl CasingResult {
    /// Radial growth of the scroll over a full turn (mm)
    pub fn scroll_growth_mm(&self) -> f64 {
        self.discharge_height_mm
    }
}

/// Casing geometry from flow, tip speed, D2 and inlet width b1.
pub fn calculate(
    flow_cfm: f64,
    tip_speed_ms: f64,
    outer_diameter_mm: f64,
    inlet_width_mm: f64,
) -> CasingResult {
    let flow: CubicMetersPerSecond = Cfm(flow_cfm).into();

    let volute_width_mm = 1.25 * inlet_width_mm;
    let cutoff_clearance_mm = CUTOFF_CLEARANCE_RATIO * outer_diameter_mm;
    let cutoff_radius_mm = outer_diameter_mm / 2.0 + cutoff_clearance_mm;

    let discharge_velocity_ms = DISCHARGE_VELOCITY_RATIO * tip_speed_ms;
    let area_m2 = if discharge_velocity_ms > 0.0 {
        flow.value() / discharge_velocity_ms
    } else {
        0.0
    };
    let discharge_area_mm2 = area_m2.max(0.0) * 1e6;

    let discharge_width_mm = (discharge_area_mm2 / DISCHARGE_ASPECT_RATIO).sqrt();
    let discharge_height_mm = discharge_width_mm * DISCHARGE_ASPECT_RATIO;
    let discharge_diameter_mm = (4.0 * discharge_area_mm2 / std::f64::consts::PI).sqrt();

    let scroll_radii_mm = [0.0, 0.25, 0.5, 0.75, 1.0].map(|f| cutoff_radius_mm + discharge_height_mm * f);

    CasingResult {
        volute_width_mm,
        cutoff_clearance_mm,
        cutoff_radius_mm,
        discharge_velocity_ms,
        discharge_area_mm2,
        discharge_width_mm,
        discharge_height_mm,
        discharge_diameter_mm,
        scroll_radii_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_point() {
        let result = calculate(5000.0, 49.3954, 539.076, 282.083);
        assert!((result.volute_width_mm - 352.60).abs() < 0.01);
        assert!((result.cutoff_radius_mm - 307.27).abs() < 0.01);
        assert!((result.discharge_area_mm2 - 68_246.0).abs() < 1.0);
        assert!((result.discharge_width_mm - 233.66).abs() < 0.01);
        assert!((result.discharge_height_mm - 292.07).abs() < 0.01);
        assert!((result.discharge_diameter_mm - 294.78).abs() < 0.01);
    }

    #[test]
    fn test_discharge_area_consistency() {
        let result = calculate(12_000.0, 80.0, 700.0, 200.0);
        let area = result.discharge_width_mm * result.discharge_height_mm;
        assert!((area - result.discharge_area_mm2).abs() / result.discharge_area_mm2 < 1e-12);
        let diameter = (4.0 * result.discharge_area_mm2 / std::f64::consts::PI).sqrt();
        assert_eq!(result.discharge_diameter_mm, diameter);
    }

    #[test]
    fn test_scroll_radii() {
        let result = calculate(5000.0, 49.3954, 539.076, 282.083);
        let [r0, r90, r180, r270, r360] = result.scroll_radii_mm;
        assert_eq!(r0, result.cutoff_radius_mm);
        assert!((r360 - r0 - result.discharge_height_mm).abs() < 1e-9);
        assert!(r0 < r90 && r90 < r180 && r180 < r270 && r270 < r360);
    }

    #[test]
    fn test_zero_and_negative_flow() {
        let stopped = calculate(5000.0, 0.0, 0.0, 0.0);
        assert_eq!(stopped.discharge_area_mm2, 0.0);
        assert_eq!(stopped.discharge_diameter_mm, 0.0);

        let reversed = calculate(-5000.0, 50.0, 500.0, 100.0);
        assert_eq!(reversed.discharge_area_mm2, 0.0);
        assert_eq!(reversed.discharge_width_mm, 0.0);
    }
}
