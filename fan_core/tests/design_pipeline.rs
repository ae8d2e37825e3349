//! End-to-end checks of the design pipeline and the scripts it renders.

use fan_core::geometry::fmt_mm;
use fan_core::{design, BladeType, FanInput, MaterialKey, ScriptKind};
use proptest::prelude::*;

fn assert_finite(result: &fan_core::DesignResult) {
    let values = [
        result.air.density_kgm3,
        result.specific_speed.specific_speed,
        result.aero.tip_speed_ms,
        result.aero.outer_diameter_mm,
        result.aero.inlet_diameter_mm,
        result.aero.hub_diameter_mm,
        result.aero.outlet_width_mm,
        result.aero.inlet_width_mm,
        result.blades.solidity,
        result.stress.total_stress_mpa,
        result.stress.safety_factor,
        result.power.brake_power_hp,
        result.power.running_torque_nm,
        result.power.motor_load_percent,
        result.drivetrain.shaft_diameter_mm,
        result.casing.discharge_area_mm2,
        result.casing.discharge_diameter_mm,
        result.cost.total_cost,
        result.noise.sound_power_db,
        result.geometry.wrap_angle_rad,
    ];
    for (i, value) in values.iter().enumerate() {
        assert!(value.is_finite(), "value #{} is not finite: {}", i, value);
    }
    for point in &result.curve {
        assert!(point.flow_cfm.is_finite());
        assert!(point.static_pressure_pa.is_finite());
        assert!(point.brake_power_hp.is_finite());
    }
}

#[test]
fn test_reference_design() {
    let result = design(&FanInput::default());

    assert!(result.aero.tip_speed_ms > 25.0 && result.aero.tip_speed_ms < 200.0);
    assert!((6..=12).contains(&result.blades.count));
    assert_eq!(result.drivetrain.bearing, "6304");
    assert_eq!(result.power.suggested_motor_hp, Some(5.0));
    assert!((result.noise.sound_power_db - 63.91).abs() < 0.05);

    let drafting = result.scripts.get(ScriptKind::Drafting);
    let lines: Vec<&str> = drafting.lines().collect();
    let array = lines
        .iter()
        .position(|l| *l == "-ARRAY")
        .expect("drafting script has a polar array");
    assert_eq!(lines[array + 5], result.blades.count.to_string());
}

#[test]
fn test_scripts_share_banner_and_dimensions() {
    let result = design(&FanInput::default());
    let banner = result.geometry.parameter_banner();
    assert_eq!(banner, "D2=539.08 D1=215.63 Dh=86.25 SHAFT=20.00 Z=8");

    for (kind, text) in result.scripts.iter() {
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(first, format!("{} {}", kind.comment_prefix(), banner), "{}", kind);
    }

    // Labels in the drafting script carry the same figures as the banner
    let drafting = result.scripts.get(ScriptKind::Drafting);
    assert!(drafting.contains(&fmt_mm(result.geometry.outer_diameter_mm)));
    assert!(drafting.contains(&fmt_mm(result.geometry.inlet_diameter_mm)));
}

/// Numbers following `prefix` on body lines, in script order
fn values_after(text: &str, prefix: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|l| l.strip_prefix(prefix))
        .map(|rest| {
            let number = rest.trim().trim_end_matches(')');
            number.parse::<f64>().unwrap_or_else(|_| panic!("not a number after {:?}: {:?}", prefix, rest))
        })
        .collect()
}

fn single_mm(text: &str, prefix: &str) -> f64 {
    let values = values_after(text, prefix);
    assert_eq!(values.len(), 1, "{:?} appears {} times", prefix, values.len());
    values[0] * 1000.0
}

fn blade_headers(text: &str) -> u32 {
    text.lines().filter(|l| l.starts_with("' Blade ")).count() as u32
}

fn assert_mm(actual: f64, expected: f64, what: &str) {
    assert!((actual - expected).abs() < 0.01, "{}: {} vs {}", what, actual, expected);
}

#[test]
fn test_script_bodies_agree_on_dimensions() {
    let inputs = [
        FanInput::default(),
        FanInput {
            flow_rate_cfm: 15000.0,
            static_pressure_pa: 2500.0,
            rpm: 2900.0,
            blade_type: BladeType::Radial,
            ..FanInput::default()
        },
        FanInput {
            flow_rate_cfm: 1200.0,
            static_pressure_pa: 300.0,
            rpm: 900.0,
            blade_type: BladeType::Forward,
            material: MaterialKey::AluminumAlloy,
            ..FanInput::default()
        },
    ];

    for input in &inputs {
        let result = design(input);
        let g = &result.geometry;
        let scripts = &result.scripts;

        // Drafting: shaft, hub, inlet, outer, then the casing inlet again
        let circles = values_after(scripts.get(ScriptKind::Drafting), "CIRCLE 0,0 D ");
        assert_eq!(circles.len(), 5);
        assert_mm(circles[0], g.shaft_diameter_mm, "drafting shaft");
        assert_mm(circles[1], g.hub_diameter_mm, "drafting hub");
        assert_mm(circles[2], g.inlet_diameter_mm, "drafting D1");
        assert_mm(circles[3], g.outer_diameter_mm, "drafting D2");
        assert_mm(circles[4], g.inlet_diameter_mm, "drafting casing");

        let hub = scripts.get(ScriptKind::Hub);
        assert_mm(single_mm(hub, "Dh = "), g.hub_diameter_mm, "hub Dh");
        assert_mm(single_mm(hub, "Shaft = "), g.shaft_diameter_mm, "hub shaft");

        let rotor = scripts.get(ScriptKind::Rotor);
        assert_mm(single_mm(rotor, "D2 = "), g.outer_diameter_mm, "rotor D2");
        assert_mm(single_mm(rotor, "Dh = "), g.hub_diameter_mm, "rotor Dh");
        assert_eq!(blade_headers(rotor), g.blade_count);

        let casing = scripts.get(ScriptKind::Casing);
        assert_mm(single_mm(casing, "SuctionDia = "), g.inlet_diameter_mm, "casing D1");

        let draft = scripts.get(ScriptKind::Draft);
        let radii = values_after(draft, "Call objCircles.AddByCenterRadius(0, 0, ");
        assert_eq!(radii.len(), 4);
        let diameters: Vec<f64> = radii.iter().map(|r| r * 2000.0).collect();
        assert_mm(diameters[0], g.shaft_diameter_mm, "draft shaft");
        assert_mm(diameters[1], g.hub_diameter_mm, "draft hub");
        assert_mm(diameters[2], g.inlet_diameter_mm, "draft D1");
        assert_mm(diameters[3], g.outer_diameter_mm, "draft D2");
        assert_eq!(blade_headers(draft), g.blade_count);

        // Scripts agree with each other, not only with the geometry
        assert_mm(circles[3], diameters[3], "drafting vs draft D2");
        assert_mm(single_mm(rotor, "D2 = "), circles[3], "rotor vs drafting D2");
        assert_mm(single_mm(hub, "Dh = "), single_mm(rotor, "Dh = "), "hub vs rotor Dh");
        assert_eq!(g.blade_count, result.blades.count);
    }
}

#[test]
fn test_every_script_is_generated() {
    let result = design(&FanInput::default());
    let kinds: Vec<ScriptKind> = result.scripts.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, ScriptKind::ALL.to_vec());
    for (kind, text) in result.scripts.iter() {
        assert!(!text.contains("{{"), "{} has an unfilled placeholder", kind.file_name());
    }
}

#[test]
fn test_zero_rpm_is_total() {
    let input = FanInput {
        rpm: 0.0,
        ..FanInput::default()
    };
    let result = design(&input);

    assert_eq!(result.aero.outer_diameter_mm, 0.0);
    assert_eq!(result.geometry.wrap_angle_rad, 0.0);
    assert_finite(&result);
    assert!((6..=12).contains(&result.blades.count));
}

#[test]
fn test_all_zero_input_is_total() {
    let input = FanInput {
        flow_rate_cfm: 0.0,
        static_pressure_pa: 0.0,
        rpm: 0.0,
        motor_rating_hp: 0.0,
        ..FanInput::default()
    };
    let result = design(&input);
    assert_finite(&result);
    assert_eq!(result.curve.len(), 9);
}

#[test]
fn test_discharge_opening() {
    let result = design(&FanInput::default());
    let casing = &result.casing;

    let rect = casing.discharge_width_mm * casing.discharge_height_mm;
    assert!((rect - casing.discharge_area_mm2).abs() / casing.discharge_area_mm2 < 1e-9);

    let round = std::f64::consts::PI * casing.discharge_diameter_mm.powi(2) / 4.0;
    assert!((round - casing.discharge_area_mm2).abs() / casing.discharge_area_mm2 < 1e-9);
}

#[test]
fn test_curve_design_point() {
    let input = FanInput::default();
    let result = design(&input);
    let point = result.design_point().expect("curve has a 100% point");

    assert_eq!(point.flow_cfm, input.flow_rate_cfm);
    assert!((point.static_pressure_pa - input.static_pressure_pa).abs() < 1e-6);
    assert!((point.efficiency - result.aero.efficiency).abs() < 1e-9);
}

#[test]
fn test_design_is_deterministic() {
    let input = FanInput {
        flow_rate_cfm: 12000.0,
        static_pressure_pa: 2500.0,
        rpm: 2900.0,
        blade_type: BladeType::Radial,
        material: MaterialKey::AluminumAlloy,
        outlet_angle_deg: 90.0,
        ..FanInput::default()
    };
    assert_eq!(design(&input), design(&input));
}

proptest! {
    #[test]
    fn blade_count_stays_in_range(
        outlet in -180.0_f64..360.0,
        flow in 0.0_f64..50_000.0,
        pressure in 0.0_f64..8_000.0,
        rpm in 0.0_f64..6_000.0,
    ) {
        let input = FanInput {
            flow_rate_cfm: flow,
            static_pressure_pa: pressure,
            rpm,
            outlet_angle_deg: outlet,
            ..FanInput::default()
        };
        let result = design(&input);
        prop_assert!((6..=12).contains(&result.blades.count));
        prop_assert_eq!(result.geometry.blade_count, result.blades.count);
    }

    #[test]
    fn realistic_inputs_give_finite_results(
        flow in 0.0_f64..50_000.0,
        pressure in 0.0_f64..8_000.0,
        rpm in 0.0_f64..6_000.0,
        motor in 0.0_f64..300.0,
        temperature in -40.0_f64..200.0,
        altitude in 0.0_f64..15_000.0,
        outlet in 10.0_f64..170.0,
        inlet in 10.0_f64..80.0,
    ) {
        let input = FanInput {
            flow_rate_cfm: flow,
            static_pressure_pa: pressure,
            rpm,
            motor_rating_hp: motor,
            temperature_f: temperature,
            altitude_ft: altitude,
            outlet_angle_deg: outlet,
            inlet_angle_deg: inlet,
            ..FanInput::default()
        };
        assert_finite(&design(&input));
    }
}
