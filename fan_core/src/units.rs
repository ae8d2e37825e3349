//! # Unit Types
//!
//! Type-safe wrappers for the units that cross stage boundaries in the fan
//! design pipeline. These are plain `f64` newtypes: they keep the conversion
//! factors in one place and serialize as bare numbers.
//!
//! ## Mixed Unit Systems
//!
//! Fan catalogs are traditionally US customary while the geometry is drawn in
//! metric, so both appear:
//! - Flow: cubic feet per minute (CFM) ↔ cubic metres per second (m³/s)
//! - Pressure: pascals (Pa) ↔ inches of water gauge (in.wg)
//! - Power: horsepower (HP) ↔ kilowatts (kW) ↔ watts (W)
//! - Density: lb/ft³ ↔ kg/m³
//! - Length: metres (m) ↔ millimetres (mm)
//!
//! ## Example
//!
//! ```rust
//! use fan_core::units::{Cfm, CubicMetersPerSecond, Pascals, InchesWater};
//!
//! let q: CubicMetersPerSecond = Cfm(5000.0).into();
//! assert!((q.0 - 2.359735).abs() < 1e-6);
//!
//! let p: InchesWater = Pascals(249.088).into();
//! assert!((p.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// m³/s per CFM
pub const M3S_PER_CFM: f64 = 0.000471947;

/// Pa per inch of water gauge
pub const PA_PER_INWG: f64 = 249.088;

/// kW per horsepower
pub const KW_PER_HP: f64 = 0.7457;

/// W per horsepower
pub const W_PER_HP: f64 = 745.7;

/// kg/m³ per lb/ft³
pub const KGM3_PER_LBFT3: f64 = 16.0185;

// ============================================================================
// Flow Units
// ============================================================================

/// Volumetric flow in cubic feet per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cfm(pub f64);

/// Volumetric flow in cubic metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerSecond(pub f64);

impl From<Cfm> for CubicMetersPerSecond {
    fn from(q: Cfm) -> Self {
        CubicMetersPerSecond(q.0 * M3S_PER_CFM)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in inches of water gauge
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InchesWater(pub f64);

impl From<Pascals> for InchesWater {
    fn from(p: Pascals) -> Self {
        InchesWater(p.0 / PA_PER_INWG)
    }
}

impl From<InchesWater> for Pascals {
    fn from(p: InchesWater) -> Self {
        Pascals(p.0 * PA_PER_INWG)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in horsepower
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horsepower(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

impl From<Horsepower> for Kilowatts {
    fn from(hp: Horsepower) -> Self {
        Kilowatts(hp.0 * KW_PER_HP)
    }
}

impl From<Horsepower> for Watts {
    fn from(hp: Horsepower) -> Self {
        Watts(hp.0 * W_PER_HP)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Density in pounds per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerFt3(pub f64);

/// Density in kilograms per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

impl From<LbPerFt3> for KgPerM3 {
    fn from(rho: LbPerFt3) -> Self {
        KgPerM3(rho.0 * KGM3_PER_LBFT3)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Cfm);
impl_arithmetic!(CubicMetersPerSecond);
impl_arithmetic!(Pascals);
impl_arithmetic!(InchesWater);
impl_arithmetic!(Horsepower);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(Watts);
impl_arithmetic!(LbPerFt3);
impl_arithmetic!(KgPerM3);
impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);

/// Round to a fixed number of decimal places.
///
/// Used wherever a result is reported at a display precision (amps, starting
/// torque) so the stored value matches what is printed.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
