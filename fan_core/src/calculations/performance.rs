//! # Performance Curve
//!
//! Off-design static pressure, efficiency and brake power at 40-120% of rated
//! flow. With `r` the flow ratio:
//!
//! ```text
//! p(r) = P · (1 − 0.25(r−1)²) · (1 − 0.1(r−1)³)
//! η(r) = η_d · exp(−0.5·((r−1)/0.25)²)
//! ```
//!
//! At `r = 1` both deviation terms vanish and the point reproduces the design
//! duty exactly.

use serde::{Deserialize, Serialize};

use crate::units::PA_PER_INWG;

/// Flow percentages sampled, ascending
pub const CURVE_PERCENTAGES: [u32; 9] = [40, 50, 60, 70, 80, 90, 100, 110, 120];

/// Efficiency floor used in the brake power divisor
const MIN_CURVE_EFFICIENCY: f64 = 0.1;

/// One operating point on the fan curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceCurvePoint {
    /// Percent of rated flow
    pub percent: u32,
    /// Flow (CFM)
    pub flow_cfm: f64,
    /// Static pressure (Pa), never negative
    pub static_pressure_pa: f64,
    /// Static efficiency (fraction)
    pub efficiency: f64,
    /// Brake power (HP)
    pub brake_power_hp: f64,
}

/// Evaluate the curve at a single flow percentage.
pub fn point_at(percent: u32, flow_cfm: f64, static_pressure_pa: f64, efficiency: f64) -> PerformanceCurvePoint {
    let ratio = f64::from(percent) / 100.0;
    let deviation = ratio - 1.0;
    let q = ratio * flow_cfm;

    let p = (static_pressure_pa * (1.0 - 0.25 * deviation.powi(2)) * (1.0 - 0.1 * deviation.powi(3))).max(0.0);
    let eta = efficiency * (-0.5 * (deviation / 0.25).powi(2)).exp();
    let brake_power_hp = q * (p / PA_PER_INWG) / (6356.0 * eta.max(MIN_CURVE_EFFICIENCY));

    PerformanceCurvePoint {
        percent,
        flow_cfm: q,
        static_pressure_pa: p,
        efficiency: eta,
        brake_power_hp,
    }
}

/// Generate the nine-point curve around the design duty.
pub fn generate(flow_cfm: f64, static_pressure_pa: f64, efficiency: f64) -> Vec<PerformanceCurvePoint> {
    CURVE_PERCENTAGES
        .iter()
        .map(|&pct| point_at(pct, flow_cfm, static_pressure_pa, efficiency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_ordered_points() {
        let curve = generate(5000.0, 1000.0, 0.95);
        assert_eq!(curve.len(), 9);
        let percents: Vec<u32> = curve.iter().map(|p| p.percent).collect();
        assert_eq!(percents, CURVE_PERCENTAGES.to_vec());
        assert!(curve.windows(2).all(|w| w[0].flow_cfm < w[1].flow_cfm));
    }

    #[test]
    fn test_design_point_reproduced() {
        let curve = generate(5000.0, 1000.0, 0.9538);
        let design = curve.iter().find(|p| p.percent == 100).unwrap();
        assert_eq!(design.flow_cfm, 5000.0);
        assert_eq!(design.static_pressure_pa, 1000.0);
        assert_eq!(design.efficiency, 0.9538);
    }

    #[test]
    fn test_pressure_falls_with_flow() {
        let curve = generate(5000.0, 1000.0, 0.9);
        // r = 0.4: (1 - 0.25·0.36)·(1 + 0.1·0.216)
        let low = curve[0];
        assert!((low.static_pressure_pa - 1000.0 * 0.91 * 1.0216).abs() < 1e-6);
        assert!(curve[8].static_pressure_pa < curve[6].static_pressure_pa);
    }

    #[test]
    fn test_efficiency_peaks_at_design() {
        let curve = generate(5000.0, 1000.0, 0.9);
        let peak = curve
            .iter()
            .max_by(|a, b| a.efficiency.total_cmp(&b.efficiency))
            .unwrap();
        assert_eq!(peak.percent, 100);
    }

    #[test]
    fn test_zero_efficiency_floor() {
        let point = point_at(100, 5000.0, 1000.0, 0.0);
        let expected = 5000.0 * (1000.0 / PA_PER_INWG) / (6356.0 * 0.1);
        assert!((point.brake_power_hp - expected).abs() < 1e-9);
    }
}
