//! 2D drafting command script (`fan_design.scr`).
//!
//! Plain command-line input for a 2D CAD host: one command or argument per
//! line, a blank line ends a point list. Draws the shaft with keyway, hub,
//! D1/D2 circles, one blade polar-arrayed Z times, and the volute scroll.

use super::{banner_line, ScriptKind};
use crate::geometry::{fmt_coord, fmt_label, fmt_mm, Point, ScriptGeometry, CASING_SHEET_THICKNESS_MM, ROTOR_PLATE_THICKNESS_MM};

/// Layer names and colour indices
const LAYERS: [(&str, u8); 6] = [
    ("SHAFT", 1),
    ("HUB", 3),
    ("BLADES", 4),
    ("CASING", 6),
    ("DIMS", 7),
    ("TEXT", 7),
];

/// Offset of the D1/D2 labels outside their circles (mm)
const LABEL_OFFSET_MM: f64 = 5.0;

/// Offset of the casing labels past the scroll end (mm)
const CASING_LABEL_OFFSET_MM: f64 = 10.0;

const TEMPLATE: &str = r#"{{BANNER}}
; Centrifugal Fan Design Script
OSMODE 0
ucs world
{{LAYERS}}
CLAYER SHAFT
CIRCLE 0,0 D {{SHAFT}}
PLINE
{{KEYWAY}}
C
CLAYER TEXT
{{SHAFT_TEXT}}
CLAYER HUB
CIRCLE 0,0 D {{DH}}
CLAYER TEXT
{{HUB_TEXT}}
CLAYER DIMS
CIRCLE 0,0 D {{D1}}
CIRCLE 0,0 D {{D2}}
CLAYER TEXT
{{IMPELLER_TEXT}}
CLAYER BLADES
PLINE
{{BLADE}}

-ARRAY
L

P
0,0
{{Z}}
360
Y
CLAYER CASING
CIRCLE 0,0 D {{D1}}
PLINE
{{VOLUTE}}

CLAYER TEXT
{{CASING_TEXT}}
ZOOM E
REGEN
"#;

fn coord(point: Point) -> String {
    format!("{},{}", fmt_coord(point.x), fmt_coord(point.y))
}

fn text(x: f64, y: f64, height: f64, content: &str) -> String {
    format!(
        "TEXT {},{} {} 0 {}",
        fmt_coord(x),
        fmt_coord(y),
        fmt_mm(height),
        content
    )
}

fn point_list(points: &[Point]) -> String {
    points.iter().map(|&p| coord(p)).collect::<Vec<_>>().join("\n")
}

fn layer_block() -> String {
    LAYERS
        .iter()
        .map(|(name, color)| format!("-LAYER M {name} C {color} {name}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the drafting script
pub fn render(geometry: &ScriptGeometry) -> String {
    let th = geometry.text_height_mm();
    let shaft = geometry.shaft_diameter_mm;
    let dh = geometry.hub_diameter_mm;
    let d1 = geometry.inlet_diameter_mm;
    let d2 = geometry.outer_diameter_mm;

    let impeller_text = [
        text(d1 / 2.0 + LABEL_OFFSET_MM, 0.0, th, &format!("D1={}", fmt_label(d1))),
        text(d2 / 2.0 + LABEL_OFFSET_MM, 0.0, th, &format!("D2={}", fmt_label(d2))),
        text(
            d2 / 2.0 + LABEL_OFFSET_MM,
            -th * 1.5,
            th,
            &format!("Thk={}mm", fmt_label(ROTOR_PLATE_THICKNESS_MM)),
        ),
    ]
    .join("\n");

    let volute = geometry.volute_points();
    let end = volute.last().copied().unwrap_or(Point { x: 0.0, y: 0.0 });
    let label_x = end.x + CASING_LABEL_OFFSET_MM;
    let casing_text = [
        text(label_x, end.y, th, "CASING"),
        text(label_x, end.y - th * 1.5, th, &format!("W={}mm", fmt_label(geometry.volute_width_mm))),
        text(
            label_x,
            end.y - th * 3.0,
            th,
            &format!("Thk={}mm", fmt_label(CASING_SHEET_THICKNESS_MM)),
        ),
        text(
            label_x,
            end.y - th * 4.5,
            th,
            &format!("DischDia={}mm", fmt_label(geometry.discharge_diameter_mm)),
        ),
    ]
    .join("\n");

    TEMPLATE
        .replace("{{BANNER}}", &banner_line(ScriptKind::Drafting, geometry))
        .replace("{{LAYERS}}", &layer_block())
        .replace("{{SHAFT}}", &fmt_mm(shaft))
        .replace("{{KEYWAY}}", &point_list(&geometry.keyway_points()))
        .replace(
            "{{SHAFT_TEXT}}",
            &text(0.0, shaft / 2.0 + th, th, &format!("SHAFT D{}", fmt_label(shaft))),
        )
        .replace("{{DH}}", &fmt_mm(dh))
        .replace(
            "{{HUB_TEXT}}",
            &text(dh / 2.0, dh / 2.0, th, &format!("HUB D{}", fmt_label(dh))),
        )
        .replace("{{D1}}", &fmt_mm(d1))
        .replace("{{D2}}", &fmt_mm(d2))
        .replace("{{IMPELLER_TEXT}}", &impeller_text)
        .replace("{{BLADE}}", &point_list(&geometry.blade_profile(0.0)))
        .replace("{{Z}}", &geometry.blade_count.to_string())
        .replace("{{VOLUTE}}", &point_list(&volute))
        .replace("{{CASING_TEXT}}", &casing_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{design, FanInput};

    fn script() -> (String, ScriptGeometry) {
        let result = design(&FanInput::default());
        (render(&result.geometry), result.geometry)
    }

    #[test]
    fn test_starts_with_banner() {
        let (text, geometry) = script();
        let first = text.lines().next().unwrap();
        assert_eq!(first, format!("; {}", geometry.parameter_banner()));
    }

    #[test]
    fn test_polar_array_count() {
        let (text, geometry) = script();
        let lines: Vec<&str> = text.lines().collect();
        let array = lines.iter().position(|l| *l == "-ARRAY").unwrap();
        assert_eq!(lines[array + 1], "L");
        assert_eq!(lines[array + 3], "P");
        assert_eq!(lines[array + 4], "0,0");
        assert_eq!(lines[array + 5], geometry.blade_count.to_string());
        assert_eq!(lines[array + 6], "360");
    }

    #[test]
    fn test_polylines() {
        let (text, _) = script();
        let lines: Vec<&str> = text.lines().collect();
        let plines: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == "PLINE")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(plines.len(), 3);

        // Keyway: four corners then close
        assert_eq!(lines[plines[0] + 5], "C");

        // Blade and volute point lists end at a blank line
        let blade_len = lines[plines[1] + 1..].iter().position(|l| l.is_empty()).unwrap();
        assert_eq!(blade_len, 16);
        let volute_len = lines[plines[2] + 1..].iter().position(|l| l.is_empty()).unwrap();
        assert_eq!(volute_len, 37);
    }

    #[test]
    fn test_layers_and_ending() {
        let (text, _) = script();
        assert!(text.contains("-LAYER M SHAFT C 1 SHAFT\n"));
        assert!(text.contains("-LAYER M CASING C 6 CASING\n"));
        assert!(text.ends_with("ZOOM E\nREGEN\n"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_labels() {
        let (text, geometry) = script();
        assert!(text.contains(&format!("SHAFT D{}", fmt_label(geometry.shaft_diameter_mm))));
        assert!(text.contains(&format!("D2={}\n", fmt_label(geometry.outer_diameter_mm))));
        assert!(text.contains("Thk=4mm"));
        assert!(text.contains("Thk=3mm"));
        assert!(text.contains(&format!("DischDia={}mm", fmt_label(geometry.discharge_diameter_mm))));
    }
}
