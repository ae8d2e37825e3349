//! # Reference Catalogs
//!
//! Immutable reference data used by the design engine. All tables are
//! `const` data with no lifecycle beyond process start.
//!
//! - [`materials`] - Impeller/casing construction materials
//! - [`profiles`] - Application profiles (duty classes)
//! - [`standard_sizes`] - Standard shafts, motors, and key sections
//!
//! ## Example
//!
//! ```rust
//! use fan_core::catalogs::{MaterialCatalog, MaterialKey};
//!
//! let steel = MaterialCatalog::STANDARD.get(MaterialKey::Steel);
//! println!("{}: yield {} MPa", steel.name, steel.yield_mpa);
//! ```

pub mod materials;
pub mod profiles;
pub mod standard_sizes;

pub use materials::{MaterialCatalog, MaterialKey, MaterialProperties};
pub use profiles::{ApplicationKey, ApplicationProfile, ProfileCatalog};
pub use standard_sizes::KeySection;
