//! Plain-text design report.

use fan_core::history::HistoryRecord;
use fan_core::DesignResult;

/// Full report for one design, grouped the way the stages run
pub fn render(result: &DesignResult) -> String {
    let input = &result.input;
    let air = &result.air;
    let aero = &result.aero;
    let blades = &result.blades;
    let stress = &result.stress;
    let power = &result.power;
    let drive = &result.drivetrain;
    let casing = &result.casing;
    let advice = &result.advice;

    let mut lines = vec![
        format!(
            "FAN DESIGN  {:.0} CFM @ {:.0} Pa, {:.0} RPM, {} / {}",
            input.flow_rate_cfm, input.static_pressure_pa, input.rpm, input.blade_type, input.material
        ),
        String::new(),
        "AIR".to_string(),
        format!(
            "  Density            {:.4} kg/m³ ({:.4} lb/ft³)  [{}]",
            air.density_kgm3, air.density_lbft3, air.altitude_status
        ),
        format!(
            "  Specific speed     {:.0}  -> {}",
            result.specific_speed.specific_speed, result.specific_speed.recommended_family
        ),
        String::new(),
        "IMPELLER".to_string(),
        format!("  Tip speed U2       {:.2} m/s  [{}]", aero.tip_speed_ms, aero.tip_speed_status),
        format!("  Efficiency         {:.1} %", aero.efficiency_percent()),
        format!(
            "  D2 / D1 / Dh       {:.1} / {:.1} / {:.1} mm",
            aero.outer_diameter_mm, aero.inlet_diameter_mm, aero.hub_diameter_mm
        ),
        format!("  b2 / b1            {:.1} / {:.1} mm", aero.outlet_width_mm, aero.inlet_width_mm),
        format!(
            "  Cm1                {:.2} m/s  [{}]",
            aero.inlet_meridional_velocity_ms, aero.inlet_velocity_status
        ),
        format!(
            "  Blades             {} (solidity {:.2}, {})",
            blades.count, blades.solidity, blades.solidity_status
        ),
        format!(
            "  Stress             {:.2} MPa, SF {:.2}  [{}]",
            stress.total_stress_mpa, stress.safety_factor, stress.status
        ),
        String::new(),
        "POWER".to_string(),
        format!(
            "  Brake power        {:.2} HP ({:.2} kW)",
            power.brake_power_hp, power.brake_power_kw
        ),
        format!(
            "  Motor load         {:.1} % of {:.1} HP  [{}]",
            power.motor_load_percent, input.motor_rating_hp, power.motor_status
        ),
        format!("  Suggested motor    {} HP", power.suggested_motor_label()),
        format!(
            "  Current            {:.1} A running, {:.1} A starting",
            power.running_amps, power.starting_amps
        ),
        format!(
            "  Torque             {:.2} N·m running, {:.1} N·m starting",
            power.running_torque_nm, power.starting_torque_nm
        ),
        String::new(),
        "DRIVETRAIN".to_string(),
        format!(
            "  Shaft              {:.0} mm (required {:.2} mm)",
            drive.shaft_diameter_mm, drive.required_shaft_diameter_mm
        ),
        format!(
            "  Key                {:.0} x {:.0} x {:.0} mm",
            drive.key.width_mm, drive.key.height_mm, drive.key_length_mm
        ),
        format!("  Bearing            {}", drive.bearing),
        String::new(),
        "CASING".to_string(),
        format!(
            "  Cutoff radius      {:.1} mm (clearance {:.1} mm)",
            casing.cutoff_radius_mm, casing.cutoff_clearance_mm
        ),
        format!("  Volute width       {:.1} mm", casing.volute_width_mm),
        format!(
            "  Discharge          {:.1} x {:.1} mm (round {:.1} mm) at {:.1} m/s",
            casing.discharge_width_mm,
            casing.discharge_height_mm,
            casing.discharge_diameter_mm,
            casing.discharge_velocity_ms
        ),
        String::new(),
        "ESTIMATES".to_string(),
        format!(
            "  Cost               {:.2} (material {:.2} x {:.1})",
            result.cost.total_cost, result.cost.material_cost, result.cost.manufacturing_multiplier
        ),
        format!("  Sound power        {:.1} dB", result.noise.sound_power_db),
        String::new(),
        format!("ADVICE ({})", advice.profile_label),
        format!("  {}", advice.profile_description),
        format!(
            "  Blade type {}, outlet {:.0}°, inlet {:.0}°",
            advice.recommended_blade_type, advice.recommended_outlet_angle_deg, advice.recommended_inlet_angle_deg
        ),
        String::new(),
        "PERFORMANCE CURVE".to_string(),
        "     %      CFM        Pa     Eff %      BHP".to_string(),
    ];

    lines.extend(result.curve.iter().map(|p| {
        format!(
            "  {:>4}  {:>8.0}  {:>8.1}  {:>8.1}  {:>7.2}",
            p.percent,
            p.flow_cfm,
            p.static_pressure_pa,
            p.efficiency * 100.0,
            p.brake_power_hp
        )
    }));

    lines.join("\n")
}

/// One line per record for `history list`
pub fn history_line(record: &HistoryRecord) -> String {
    let id = record.id.to_string();
    let s = &record.summary;
    format!(
        "{}  {}  {:>8.0} CFM  {:>6.0} Pa  {:>5.0} RPM  {:>7.2} HP  D2 {:>6.1} mm",
        &id[..8],
        record.timestamp.format("%Y-%m-%d %H:%M"),
        s.flow_rate_cfm,
        s.static_pressure_pa,
        s.rpm,
        s.brake_power_hp,
        s.impeller_diameter_mm
    )
}
