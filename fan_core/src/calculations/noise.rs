//! # Noise Estimate
//!
//! Empirical sound power level from shaft power, static pressure and tip
//! speed:
//!
//! ```text
//! Lw = 10 + 10·log10(W) + 20·log10(P/100) + 3·log10(U/50)   [dB]
//! ```
//!
//! Each argument is floored at 1 so the logarithms stay finite.

use serde::{Deserialize, Serialize};

/// Sound power estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseResult {
    /// Sound power level (dB re 1 pW)
    pub sound_power_db: f64,
}

fn floor_one(value: f64) -> f64 {
    if value > 1.0 {
        value
    } else {
        1.0
    }
}

/// Estimate sound power from shaft watts, static pressure (Pa) and tip speed (m/s).
pub fn calculate(shaft_power_w: f64, static_pressure_pa: f64, tip_speed_ms: f64) -> NoiseResult {
    let w = floor_one(shaft_power_w);
    let p = floor_one(static_pressure_pa);
    let u = floor_one(tip_speed_ms);

    NoiseResult {
        sound_power_db: 10.0 + 10.0 * w.log10() + 20.0 * (p / 100.0).log10() + 3.0 * (u / 50.0).log10(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_point() {
        let result = calculate(2468.91, 1000.0, 49.3954);
        assert!((result.sound_power_db - 63.909).abs() < 1e-3);
    }

    #[test]
    fn test_floors() {
        let result = calculate(0.0, -10.0, f64::NAN);
        // 10 + 0 + 20·log10(0.01) + 3·log10(0.02)
        let expected = 10.0 - 40.0 + 3.0 * 0.02f64.log10();
        assert!((result.sound_power_db - expected).abs() < 1e-12);
    }
}
