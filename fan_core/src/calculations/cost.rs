//! # Cost Estimate
//!
//! Order-of-magnitude material cost from characteristic volumes, scaled by a
//! fabrication multiplier that grows with blade count and pressure class.

use serde::{Deserialize, Serialize};

use crate::catalogs::MaterialProperties;
use crate::units::{InchesWater, Pascals};

/// Static pressure above which the high-pressure fabrication premium applies (in.wg)
const HIGH_PRESSURE_CLASS_INWG: f64 = 5.0;

/// Cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    /// Impeller material volume (m³)
    pub impeller_volume_m3: f64,
    /// Casing material volume (m³)
    pub casing_volume_m3: f64,
    /// Raw material cost (currency units)
    pub material_cost: f64,
    /// Fabrication multiplier
    pub manufacturing_multiplier: f64,
    /// Material cost × multiplier
    pub total_cost: f64,
}

/// Estimate cost from D2, Dh, b2 (all metres) and blade count.
pub fn calculate(
    material: &MaterialProperties,
    outer_diameter_m: f64,
    hub_diameter_m: f64,
    outlet_width_m: f64,
    blade_count: u32,
    static_pressure_pa: f64,
) -> CostResult {
    let z = f64::from(blade_count);
    let annulus_m2 = std::f64::consts::PI / 4.0 * (outer_diameter_m.powi(2) - hub_diameter_m.powi(2));
    let impeller_volume_m3 = annulus_m2 * outlet_width_m * z * 0.1;
    let casing_volume_m3 = (1.5 * outer_diameter_m).powi(3) * 0.05;

    let material_cost = (impeller_volume_m3 + casing_volume_m3) * material.density_kgm3 * material.unit_price;

    let p_inwg: InchesWater = Pascals(static_pressure_pa).into();
    let pressure_premium = if p_inwg.value() > HIGH_PRESSURE_CLASS_INWG { 0.15 } else { 0.0 };
    let manufacturing_multiplier = 1.0 + 0.1 * z + pressure_premium;

    CostResult {
        impeller_volume_m3,
        casing_volume_m3,
        material_cost,
        manufacturing_multiplier,
        total_cost: material_cost * manufacturing_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{MaterialCatalog, MaterialKey};

    #[test]
    fn test_design_point() {
        let steel = MaterialCatalog::STANDARD.get(MaterialKey::Steel);
        let result = calculate(steel, 0.539076, 0.0862521, 0.1128332, 8, 1000.0);
        assert!((result.material_cost - 547.66).abs() < 0.05);
        assert!((result.manufacturing_multiplier - 1.8).abs() < 1e-12);
        assert!((result.total_cost - 985.80).abs() < 0.1);
    }

    #[test]
    fn test_high_pressure_premium() {
        let steel = MaterialCatalog::STANDARD.get(MaterialKey::Steel);
        // 1500 Pa = 6.02 in.wg
        let result = calculate(steel, 0.5, 0.1, 0.1, 10, 1500.0);
        assert!((result.manufacturing_multiplier - 2.15).abs() < 1e-12);
    }

    #[test]
    fn test_zero_geometry() {
        let frp = MaterialCatalog::STANDARD.get(MaterialKey::Frp);
        let result = calculate(frp, 0.0, 0.0, 0.0, 10, 0.0);
        assert_eq!(result.material_cost, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }
}
