//! # Script Geometry
//!
//! The resolved geometry every CAD script is written from, plus the two
//! samplers (logarithmic blade spiral and volute scroll) and the number
//! formatting shared by all emitters.
//!
//! Dimensions are rounded to 0.01 mm once, when [`ScriptGeometry`] is built,
//! and sampled points to 0.001 mm. Emitters never re-derive a value, so the
//! drafting script and the 3D scripts always agree digit for digit.
//!
//! ## Example
//!
//! ```rust
//! use fan_core::{design, FanInput};
//!
//! let result = design(&FanInput::default());
//! let geometry = &result.geometry;
//! let blade = geometry.blade_profile(0.0);
//! assert_eq!(blade.len(), 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{AeroResult, BladeResult, CasingResult, DrivetrainResult};
use crate::inputs::FanInput;
use crate::units::round_to;

/// Segments per blade spiral
pub const BLADE_SEGMENTS: usize = 15;

/// Segments per volute turn (10° each)
pub const VOLUTE_SEGMENTS: usize = 36;

/// Tangent used when the mean blade angle gives a zero tangent
const FALLBACK_BLADE_ANGLE_RAD: f64 = 0.5;

/// Backplate thickness of the rotor (mm)
pub const ROTOR_PLATE_THICKNESS_MM: f64 = 4.0;

/// Casing sheet thickness (mm)
pub const CASING_SHEET_THICKNESS_MM: f64 = 3.0;

/// A sketch point in millimetres, already rounded to 0.001 mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn sampled(radius: f64, angle_rad: f64) -> Self {
        Point {
            x: round_to(radius * angle_rad.cos(), 3),
            y: round_to(radius * angle_rad.sin(), 3),
        }
    }
}

/// Blade wrap angle (rad) of a logarithmic spiral between radii `r1` and `r2`.
///
/// `ln(r2/r1) / tan(β)` with β the mean of the inlet and outlet angles. A zero
/// tangent falls back to tan(0.5 rad); a non-positive radius gives no wrap.
pub fn wrap_angle(r1: f64, r2: f64, inlet_angle_deg: f64, outlet_angle_deg: f64) -> f64 {
    if r1 <= 0.0 || r2 <= 0.0 {
        return 0.0;
    }
    let mean = ((inlet_angle_deg + outlet_angle_deg) / 2.0).to_radians();
    let tan = mean.tan();
    let tan = if mean == 0.0 || tan.abs() < 1e-9 || !tan.is_finite() {
        FALLBACK_BLADE_ANGLE_RAD.tan()
    } else {
        tan
    };
    let wrap = (r2 / r1).ln() / tan;
    if wrap.is_finite() {
        wrap
    } else {
        0.0
    }
}

/// Geometry shared by all CAD scripts (mm unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptGeometry {
    /// Impeller outer diameter D2
    pub outer_diameter_mm: f64,
    /// Impeller inlet diameter D1
    pub inlet_diameter_mm: f64,
    /// Hub diameter Dh
    pub hub_diameter_mm: f64,
    /// Standard shaft diameter
    pub shaft_diameter_mm: f64,
    /// Blade count Z
    pub blade_count: u32,
    pub key_width_mm: f64,
    pub key_height_mm: f64,
    /// Hub axial length, 1.5 × b2
    pub hub_width_mm: f64,
    /// Volute radius at the tongue
    pub cutoff_radius_mm: f64,
    /// Volute radial growth over 360°
    pub volute_growth_mm: f64,
    pub volute_width_mm: f64,
    pub discharge_diameter_mm: f64,
    /// Blade wrap angle (rad)
    pub wrap_angle_rad: f64,
}

impl ScriptGeometry {
    /// Resolve script geometry from the stage results.
    pub fn resolve(
        input: &FanInput,
        aero: &AeroResult,
        blades: &BladeResult,
        drivetrain: &DrivetrainResult,
        casing: &CasingResult,
    ) -> Self {
        let d2 = round_to(aero.outer_diameter_mm, 2);
        let d1 = round_to(aero.inlet_diameter_mm, 2);

        ScriptGeometry {
            outer_diameter_mm: d2,
            inlet_diameter_mm: d1,
            hub_diameter_mm: round_to(aero.hub_diameter_mm, 2),
            shaft_diameter_mm: round_to(drivetrain.shaft_diameter_mm, 2),
            blade_count: blades.count,
            key_width_mm: round_to(drivetrain.key.width_mm, 2),
            key_height_mm: round_to(drivetrain.key.height_mm, 2),
            hub_width_mm: round_to(1.5 * aero.outlet_width_mm, 2),
            cutoff_radius_mm: round_to(casing.cutoff_radius_mm, 2),
            volute_growth_mm: round_to(casing.scroll_growth_mm(), 2),
            volute_width_mm: round_to(casing.volute_width_mm, 2),
            discharge_diameter_mm: round_to(casing.discharge_diameter_mm, 2),
            wrap_angle_rad: wrap_angle(d1 / 2.0, d2 / 2.0, input.inlet_angle_deg, input.outlet_angle_deg),
        }
    }

    /// Text height for 2D annotation: D2/25
    pub fn text_height_mm(&self) -> f64 {
        round_to(self.outer_diameter_mm / 25.0, 2)
    }

    /// Angular offset (rad) of blade `index` in the polar pattern
    pub fn blade_offset(&self, index: u32) -> f64 {
        if self.blade_count == 0 {
            return 0.0;
        }
        f64::from(index) * std::f64::consts::TAU / f64::from(self.blade_count)
    }

    /// Blade centreline from D1 to D2, rotated by `offset_rad`.
    ///
    /// Returns `BLADE_SEGMENTS + 1` points.
    pub fn blade_profile(&self, offset_rad: f64) -> Vec<Point> {
        let r1 = self.inlet_diameter_mm / 2.0;
        let r2 = self.outer_diameter_mm / 2.0;
        (0..=BLADE_SEGMENTS)
            .map(|i| {
                let t = i as f64 / BLADE_SEGMENTS as f64;
                Point::sampled(r1 + (r2 - r1) * t, offset_rad + self.wrap_angle_rad * t)
            })
            .collect()
    }

    /// All blades of the pattern, in index order
    pub fn blade_pattern(&self) -> Vec<Vec<Point>> {
        (0..self.blade_count)
            .map(|i| self.blade_profile(self.blade_offset(i)))
            .collect()
    }

    /// Volute scroll from the cutoff radius, one point per 10°.
    ///
    /// Returns `VOLUTE_SEGMENTS + 1` points; the last is at 360°.
    pub fn volute_points(&self) -> Vec<Point> {
        (0..=VOLUTE_SEGMENTS)
            .map(|i| {
                let fraction = i as f64 / VOLUTE_SEGMENTS as f64;
                let radius = self.cutoff_radius_mm + self.volute_growth_mm * fraction;
                Point::sampled(radius, (i as f64 * 10.0).to_radians())
            })
            .collect()
    }

    /// Keyway rectangle centred on the top of the shaft bore, clockwise from
    /// the lower left corner
    pub fn keyway_points(&self) -> [Point; 4] {
        let half_w = self.key_width_mm / 2.0;
        let bottom = self.shaft_diameter_mm / 2.0 - self.key_height_mm / 2.0;
        let top = self.shaft_diameter_mm / 2.0 + self.key_height_mm / 2.0;
        [(-half_w, bottom), (-half_w, top), (half_w, top), (half_w, bottom)].map(|(x, y)| Point {
            x: round_to(x, 3),
            y: round_to(y, 3),
        })
    }

    /// One-line parameter summary placed at the top of every script
    pub fn parameter_banner(&self) -> String {
        format!(
            "D2={} D1={} Dh={} SHAFT={} Z={}",
            fmt_mm(self.outer_diameter_mm),
            fmt_mm(self.inlet_diameter_mm),
            fmt_mm(self.hub_diameter_mm),
            fmt_mm(self.shaft_diameter_mm),
            self.blade_count
        )
    }
}

// ============================================================================
// Number formatting
// ============================================================================

fn positive_zero(value: f64) -> f64 {
    // Folds -0.0 so it never prints as "-0.00"
    value + 0.0
}

/// Dimension in millimetres, two decimals
pub fn fmt_mm(value: f64) -> String {
    format!("{:.2}", positive_zero(round_to(value, 2)))
}

/// Coordinate in millimetres, three decimals
pub fn fmt_coord(value: f64) -> String {
    format!("{:.3}", positive_zero(round_to(value, 3)))
}

/// Millimetre value converted to metres, six decimals
pub fn fmt_m(value_mm: f64) -> String {
    format!("{:.6}", positive_zero(round_to(value_mm / 1000.0, 6)))
}

/// Label value, whole millimetres
pub fn fmt_label(value: f64) -> String {
    format!("{:.0}", positive_zero(value.round()))
}
