//! Impeller/Casing Materials
//!
//! Mechanical properties and a relative unit price for the five construction
//! materials the sizing engine supports. Values are typical handbook figures,
//! not certified minimums.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Construction material key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaterialKey {
    /// Carbon steel
    #[default]
    Steel,
    /// Aluminum alloy
    #[serde(rename = "Aluminum_Alloy")]
    AluminumAlloy,
    /// Cast iron
    #[serde(rename = "Cast_Iron")]
    CastIron,
    /// Fiberglass reinforced plastic
    #[serde(rename = "FRP")]
    Frp,
    /// ABS plastic
    Plastic,
}

impl MaterialKey {
    /// All material keys, in catalog order
    pub const ALL: [MaterialKey; 5] = [
        MaterialKey::Steel,
        MaterialKey::AluminumAlloy,
        MaterialKey::CastIron,
        MaterialKey::Frp,
        MaterialKey::Plastic,
    ];

    /// Get the catalog key string (e.g., "Steel", "Cast_Iron")
    pub fn code(&self) -> &'static str {
        match self {
            MaterialKey::Steel => "Steel",
            MaterialKey::AluminumAlloy => "Aluminum_Alloy",
            MaterialKey::CastIron => "Cast_Iron",
            MaterialKey::Frp => "FRP",
            MaterialKey::Plastic => "Plastic",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "STEEL" | "CARBON_STEEL" | "CS" => Ok(MaterialKey::Steel),
            "ALUMINUM_ALLOY" | "ALUMINUM" | "ALUMINIUM" | "AL" => Ok(MaterialKey::AluminumAlloy),
            "CAST_IRON" | "CI" => Ok(MaterialKey::CastIron),
            "FRP" | "FIBERGLASS" => Ok(MaterialKey::Frp),
            "PLASTIC" | "ABS" | "ABS_PLASTIC" => Ok(MaterialKey::Plastic),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    fn index(self) -> usize {
        match self {
            MaterialKey::Steel => 0,
            MaterialKey::AluminumAlloy => 1,
            MaterialKey::CastIron => 2,
            MaterialKey::Frp => 3,
            MaterialKey::Plastic => 4,
        }
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mechanical and cost properties of a construction material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    /// Catalog key
    pub key: MaterialKey,
    /// Display name
    pub name: &'static str,
    /// Density (kg/m³)
    pub density_kgm3: f64,
    /// Yield strength (MPa)
    pub yield_mpa: f64,
    /// Poisson ratio
    pub poisson: f64,
    /// Young's modulus (GPa)
    pub youngs_gpa: f64,
    /// Relative unit price per kg
    pub unit_price: f64,
}

/// Standard material table, indexed in `MaterialKey::ALL` order
pub const STANDARD_MATERIALS: [MaterialProperties; 5] = [
    MaterialProperties {
        key: MaterialKey::Steel,
        name: "Carbon Steel",
        density_kgm3: 7850.0,
        yield_mpa: 250.0,
        poisson: 0.3,
        youngs_gpa: 200.0,
        unit_price: 1.5,
    },
    MaterialProperties {
        key: MaterialKey::AluminumAlloy,
        name: "Aluminum Alloy",
        density_kgm3: 2700.0,
        yield_mpa: 150.0,
        poisson: 0.33,
        youngs_gpa: 70.0,
        unit_price: 3.2,
    },
    MaterialProperties {
        key: MaterialKey::CastIron,
        name: "Cast Iron",
        density_kgm3: 7200.0,
        yield_mpa: 200.0,
        poisson: 0.27,
        youngs_gpa: 100.0,
        unit_price: 1.2,
    },
    MaterialProperties {
        key: MaterialKey::Frp,
        name: "Fiberglass (FRP)",
        density_kgm3: 1800.0,
        yield_mpa: 60.0,
        poisson: 0.35,
        youngs_gpa: 20.0,
        unit_price: 4.5,
    },
    MaterialProperties {
        key: MaterialKey::Plastic,
        name: "ABS Plastic",
        density_kgm3: 1400.0,
        yield_mpa: 40.0,
        poisson: 0.4,
        youngs_gpa: 2.0,
        unit_price: 0.8,
    },
];

/// Read-only material catalog.
///
/// Holds exactly one entry per [`MaterialKey`], so lookups are total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialCatalog {
    entries: [MaterialProperties; 5],
}

impl MaterialCatalog {
    /// The built-in catalog
    pub const STANDARD: MaterialCatalog = MaterialCatalog {
        entries: STANDARD_MATERIALS,
    };

    /// Build a catalog from custom entries.
    ///
    /// Entries are re-ordered by key; returns an error if any key is missing
    /// or duplicated.
    pub fn new(entries: [MaterialProperties; 5]) -> CalcResult<Self> {
        let mut ordered = STANDARD_MATERIALS;
        let mut seen = [false; 5];
        for entry in entries {
            let idx = entry.key.index();
            if seen[idx] {
                return Err(CalcError::invalid_input(
                    "materials",
                    entry.key.code(),
                    "Duplicate material key in catalog",
                ));
            }
            seen[idx] = true;
            ordered[idx] = entry;
        }
        Ok(MaterialCatalog { entries: ordered })
    }

    /// Look up the properties for a material key
    pub fn get(&self, key: MaterialKey) -> &MaterialProperties {
        &self.entries[key.index()]
    }

    /// Iterate all entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &MaterialProperties> {
        self.entries.iter()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let steel = MaterialCatalog::STANDARD.get(MaterialKey::Steel);
        assert_eq!(steel.name, "Carbon Steel");
        assert_eq!(steel.density_kgm3, 7850.0);
        assert_eq!(steel.yield_mpa, 250.0);

        let frp = MaterialCatalog::STANDARD.get(MaterialKey::Frp);
        assert_eq!(frp.poisson, 0.35);
    }

    #[test]
    fn test_table_order_matches_keys() {
        for (props, key) in STANDARD_MATERIALS.iter().zip(MaterialKey::ALL) {
            assert_eq!(props.key, key);
        }
    }

    #[test]
    fn test_flexible_parse() {
        assert_eq!(MaterialKey::from_str_flexible("cast iron").unwrap(), MaterialKey::CastIron);
        assert_eq!(MaterialKey::from_str_flexible("Aluminum_Alloy").unwrap(), MaterialKey::AluminumAlloy);
        assert_eq!(MaterialKey::from_str_flexible("abs").unwrap(), MaterialKey::Plastic);
        assert!(MaterialKey::from_str_flexible("Unobtainium").is_err());
    }

    #[test]
    fn test_custom_catalog_rejects_duplicates() {
        let mut entries = STANDARD_MATERIALS;
        entries[1] = entries[0];
        assert!(MaterialCatalog::new(entries).is_err());
    }

    #[test]
    fn test_custom_catalog_reorders() {
        let mut entries = STANDARD_MATERIALS;
        entries.reverse();
        entries[0].unit_price = 9.9; // Plastic after reversal
        let catalog = MaterialCatalog::new(entries).unwrap();
        assert_eq!(catalog.get(MaterialKey::Plastic).unit_price, 9.9);
        assert_eq!(catalog.get(MaterialKey::Steel).unit_price, 1.5);
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&MaterialKey::CastIron).unwrap();
        assert_eq!(json, "\"Cast_Iron\"");
        let roundtrip: MaterialKey = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, MaterialKey::CastIron);
    }
}
