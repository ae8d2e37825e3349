//! Impeller draft sheet automation script (`Create_Draft.vbs`).
//!
//! A 2D draft document in the 3D host with the shaft, hub, D1 and D2 circles
//! and every blade as line segments.

use super::rotor::blade_lines;
use super::{fill_vbs_common, ScriptKind};
use crate::geometry::{fmt_m, ScriptGeometry};

const TEMPLATE: &str = r#"{{BANNER}}
' Impeller Draft Sheet
Option Explicit

Dim objApp, objDoc, objSheet, objLines, objCircles

{{CONNECT}}

Set objDoc = objApp.Documents.Add("SolidEdge.DraftDocument")
Set objSheet = objDoc.ActiveSheet
Set objLines = objSheet.Lines2d
Set objCircles = objSheet.Circles2d

' Shaft, Hub, Inlet, Outlet
Call objCircles.AddByCenterRadius(0, 0, {{SHAFT_R}})
Call objCircles.AddByCenterRadius(0, 0, {{DH_R}})
Call objCircles.AddByCenterRadius(0, 0, {{D1_R}})
Call objCircles.AddByCenterRadius(0, 0, {{D2_R}})

' Blades
{{BLADES}}

{{FIT_VIEW}}
"#;

/// Render the draft sheet script
pub fn render(geometry: &ScriptGeometry) -> String {
    fill_vbs_common(TEMPLATE, ScriptKind::Draft, geometry)
        .replace("{{SHAFT_R}}", &fmt_m(geometry.shaft_diameter_mm / 2.0))
        .replace("{{DH_R}}", &fmt_m(geometry.hub_diameter_mm / 2.0))
        .replace("{{D1_R}}", &fmt_m(geometry.inlet_diameter_mm / 2.0))
        .replace("{{D2_R}}", &fmt_m(geometry.outer_diameter_mm / 2.0))
        .replace("{{BLADES}}", &blade_lines(geometry, "objLines"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BLADE_SEGMENTS;
    use crate::{design, FanInput};

    #[test]
    fn test_draft_script() {
        let result = design(&FanInput::default());
        let geometry = &result.geometry;
        let text = render(geometry);

        assert!(text.contains("Documents.Add(\"SolidEdge.DraftDocument\")"));
        assert_eq!(text.matches("objCircles.AddByCenterRadius").count(), 4);
        assert_eq!(
            text.matches("Call objLines.AddBy2Points").count(),
            geometry.blade_count as usize * BLADE_SEGMENTS
        );
        assert!(text.contains(&format!(
            "AddByCenterRadius(0, 0, {})",
            fmt_m(geometry.outer_diameter_mm / 2.0)
        )));
    }
}
