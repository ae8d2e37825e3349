//! # fan_core - Centrifugal Fan Design Engine
//!
//! `fan_core` sizes a centrifugal fan from its operating point and renders the
//! resulting geometry as CAD automation scripts. All inputs and outputs are
//! JSON-serializable, so the engine can sit behind a CLI, a form, or another
//! program without glue code.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`design`] is a pure function of [`FanInput`] and two
//!   constant catalogs
//! - **Total**: degenerate inputs produce fallback values and warning
//!   classifications, never an error
//! - **JSON-First**: All types implement Serialize
//! - **Rich Errors**: Structured error types for the fallible edges (files,
//!   history, key parsing)
//!
//! ## Quick Start
//!
//! ```rust
//! use fan_core::{design, FanInput, ScriptKind};
//!
//! let result = design(&FanInput::default());
//! println!("D2 = {:.1} mm, Z = {}", result.aero.outer_diameter_mm, result.blades.count);
//!
//! let drafting = result.scripts.get(ScriptKind::Drafting);
//! assert!(drafting.starts_with("; D2="));
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - Operating point and design choices
//! - [`catalogs`] - Materials, application profiles, standard sizes
//! - [`calculations`] - The design stages (air through advisor)
//! - [`geometry`] - Resolved drawing geometry shared by every script
//! - [`scripts`] - CAD script emitters
//! - [`design`] - The pipeline tying the stages together
//! - [`history`] - Recorded calculations
//! - [`units`] - Type-safe unit wrappers and conversion constants
//! - [`errors`] - Structured error types
//! - [`file_io`] - History files and script export with atomic saves and locking

pub mod calculations;
pub mod catalogs;
pub mod design;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod geometry;
pub mod history;
pub mod inputs;
pub mod scripts;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalogs::{ApplicationKey, MaterialCatalog, MaterialKey, ProfileCatalog};
pub use design::{compute, design, DesignResult, DesignSummary};
pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_history, load_or_create_history, save_history, write_scripts, FileLock};
pub use history::{HistoryLog, HistoryRecord};
pub use inputs::{BladeType, FanInput};
pub use scripts::{ScriptKind, ScriptSet};
