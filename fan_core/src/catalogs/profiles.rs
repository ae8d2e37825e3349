//! Application Profiles
//!
//! Typical duty classes for centrifugal fans, each with the blade family and
//! blade angles that usually suit it. Profiles only drive suggestions; the
//! sizing itself always uses the blade type and angles on the input.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::BladeType;

/// Application profile key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationKey {
    /// General ventilation
    #[default]
    General,
    /// High pressure blower
    #[serde(rename = "High Pressure")]
    HighPressure,
    /// High suction / flow
    #[serde(rename = "High Flow")]
    HighFlow,
    /// High velocity / material transport
    Transport,
}

impl ApplicationKey {
    /// All profile keys, in catalog order
    pub const ALL: [ApplicationKey; 4] = [
        ApplicationKey::General,
        ApplicationKey::HighPressure,
        ApplicationKey::HighFlow,
        ApplicationKey::Transport,
    ];

    /// Get the catalog key string
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationKey::General => "General",
            ApplicationKey::HighPressure => "High Pressure",
            ApplicationKey::HighFlow => "High Flow",
            ApplicationKey::Transport => "Transport",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace(['_', '-'], " ").as_str() {
            "GENERAL" | "GENERAL VENTILATION" => Ok(ApplicationKey::General),
            "HIGH PRESSURE" | "HIGHPRESSURE" | "HP" => Ok(ApplicationKey::HighPressure),
            "HIGH FLOW" | "HIGHFLOW" | "HF" => Ok(ApplicationKey::HighFlow),
            "TRANSPORT" | "HIGH VELOCITY" => Ok(ApplicationKey::Transport),
            _ => Err(CalcError::profile_not_found(s)),
        }
    }

    fn index(self) -> usize {
        match self {
            ApplicationKey::General => 0,
            ApplicationKey::HighPressure => 1,
            ApplicationKey::HighFlow => 2,
            ApplicationKey::Transport => 3,
        }
    }
}

impl std::fmt::Display for ApplicationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Recommended configuration for an application class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicationProfile {
    /// Catalog key
    pub key: ApplicationKey,
    /// Display label
    pub label: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Recommended blade family
    pub blade_type: BladeType,
    /// Recommended outlet blade angle β2 (deg)
    pub outlet_angle_deg: f64,
    /// Recommended inlet blade angle β1 (deg)
    pub inlet_angle_deg: f64,
}

/// Standard profile table, indexed in `ApplicationKey::ALL` order
pub const STANDARD_PROFILES: [ApplicationProfile; 4] = [
    ApplicationProfile {
        key: ApplicationKey::General,
        label: "General Ventilation",
        description: "Balanced flow and pressure. Good efficiency.",
        blade_type: BladeType::Backward,
        outlet_angle_deg: 35.0,
        inlet_angle_deg: 25.0,
    },
    ApplicationProfile {
        key: ApplicationKey::HighPressure,
        label: "High Pressure Blower",
        description: "Combustion air, fluidized beds. Narrow impeller.",
        blade_type: BladeType::Radial,
        outlet_angle_deg: 90.0,
        inlet_angle_deg: 35.0,
    },
    ApplicationProfile {
        key: ApplicationKey::HighFlow,
        label: "High Suction / Flow",
        description: "HVAC, fume extraction. Wide impeller.",
        blade_type: BladeType::Forward,
        outlet_angle_deg: 145.0,
        inlet_angle_deg: 20.0,
    },
    ApplicationProfile {
        key: ApplicationKey::Transport,
        label: "High Velocity / Transport",
        description: "Dust collecting, material handling. Rugged.",
        blade_type: BladeType::Radial,
        outlet_angle_deg: 90.0,
        inlet_angle_deg: 45.0,
    },
];

/// Read-only application profile catalog, one entry per [`ApplicationKey`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileCatalog {
    entries: [ApplicationProfile; 4],
}

impl ProfileCatalog {
    /// The built-in catalog
    pub const STANDARD: ProfileCatalog = ProfileCatalog {
        entries: STANDARD_PROFILES,
    };

    /// Build a catalog from custom entries (re-ordered by key).
    pub fn new(entries: [ApplicationProfile; 4]) -> CalcResult<Self> {
        let mut ordered = STANDARD_PROFILES;
        let mut seen = [false; 4];
        for entry in entries {
            let idx = entry.key.index();
            if seen[idx] {
                return Err(CalcError::invalid_input(
                    "profiles",
                    entry.key.code(),
                    "Duplicate application key in catalog",
                ));
            }
            seen[idx] = true;
            ordered[idx] = entry;
        }
        Ok(ProfileCatalog { entries: ordered })
    }

    /// Look up a profile by key
    pub fn get(&self, key: ApplicationKey) -> &ApplicationProfile {
        &self.entries[key.index()]
    }

    /// Iterate all entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ApplicationProfile> {
        self.entries.iter()
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        ProfileCatalog::STANDARD
    }
}
