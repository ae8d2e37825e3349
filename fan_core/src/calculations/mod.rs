//! # Design Stages
//!
//! Each stage of the fan sizing pipeline is a pure function of the input and
//! earlier stage results:
//!
//! - `*Result` - Stage results (JSON-serializable)
//! - `calculate(...) -> *Result` - Total calculation; every division and
//!   logarithm is guarded, so no stage can fail
//! - Status enums classify out-of-range physics (`message()` gives the
//!   display text) instead of rejecting the design
//!
//! ## Available Stages
//!
//! - [`air`] - Air density at site conditions
//! - [`specific_speed`] - Specific speed and suggested impeller family
//! - [`aero`] - Tip speed, diameters, blade heights, velocities
//! - [`blades`] - Blade count and solidity
//! - [`stress`] - Impeller stress and safety factor
//! - [`power`] - Brake power, motor load, electrical estimates
//! - [`drivetrain`] - Shaft, key, and bearing
//! - [`casing`] - Volute and discharge geometry
//! - [`performance`] - Nine-point fan curve
//! - [`cost`] - Material and fabrication cost
//! - [`noise`] - Sound power level
//! - [`advisor`] - Recommended blade angles per application profile

pub mod advisor;
pub mod aero;
pub mod air;
pub mod blades;
pub mod casing;
pub mod cost;
pub mod drivetrain;
pub mod noise;
pub mod performance;
pub mod power;
pub mod specific_speed;
pub mod stress;

// Re-export commonly used types
pub use advisor::DesignAdvice;
pub use aero::{AeroResult, InletVelocityStatus, TipSpeedStatus};
pub use air::{AirProperties, AltitudeStatus};
pub use blades::{BladeResult, SolidityStatus};
pub use casing::CasingResult;
pub use cost::CostResult;
pub use drivetrain::DrivetrainResult;
pub use noise::NoiseResult;
pub use performance::PerformanceCurvePoint;
pub use power::{MotorLoadStatus, PowerResult};
pub use specific_speed::{ImpellerFamily, SpecificSpeedResult};
pub use stress::{SafetyStatus, StressResult};
