//! Rotor part automation script (`Create_Rotor.vbs`).
//!
//! A 4 mm backplate disk at D2 with the hub bore cut out, plus a sketch of
//! every blade centreline left unextruded as a welding layout.

use super::{fill_vbs_common, vbs_polyline, ScriptKind};
use crate::geometry::{fmt_label, fmt_m, fmt_mm, ScriptGeometry, ROTOR_PLATE_THICKNESS_MM};

/// Annotation offset beyond the rim (m)
const TEXT_OFFSET_M: f64 = 0.05;

const TEMPLATE: &str = r#"{{BANNER}}
' Rotor Part Generator
Option Explicit

Dim objApp, objDoc, objProfile, objExtrusion, objCutout, objBladeProfile
Dim D2, Dh, PlateThk

{{CONNECT}}

Set objDoc = objApp.Documents.Add("SolidEdge.PartDocument")

' D2 = {{D2_MM}} mm
D2 = {{D2_M}}
' Hub Bore = {{DH_MM}} mm
Dh = {{DH_M}}
' Plate Thickness = {{THK_MM}} mm
PlateThk = {{THK_M}}

' 1. Backplate
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.Circles2d.AddByCenterRadius(0, 0, D2 / 2)
Set objExtrusion = objDoc.Models.AddFiniteExtrudedProtrusion(1, objProfile, 0, PlateThk)
objProfile.Visible = False

' 2. Hub Bore
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.Circles2d.AddByCenterRadius(0, 0, Dh / 2)
Set objCutout = objDoc.Models.AddFiniteExtrudedCutout(1, objProfile, 0, PlateThk * 2)
objProfile.Visible = False

' 3. Blade Marking Sketch ({{Z}} blades, not extruded)
Set objBladeProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
On Error Resume Next
objBladeProfile.Name = "Blade_Marking_Pattern"
On Error GoTo 0
{{BLADES}}

Call objBladeProfile.TextBoxes2d.Add(0, {{TEXT_Y}}, 0, "D2={{D2_LABEL}}mm Thk={{THK_LABEL}}mm")
objBladeProfile.Visible = True

{{FIT_VIEW}}
"#;

/// Sketch lines for every blade, one comment line per blade
pub(super) fn blade_lines(geometry: &ScriptGeometry, target: &str) -> String {
    geometry
        .blade_pattern()
        .iter()
        .enumerate()
        .map(|(i, blade)| {
            let mut lines = vec![format!("' Blade {}", i + 1)];
            lines.extend(vbs_polyline(target, blade));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the rotor script
pub fn render(geometry: &ScriptGeometry) -> String {
    let text_y = geometry.outer_diameter_mm / 2.0 + TEXT_OFFSET_M * 1000.0;

    fill_vbs_common(TEMPLATE, ScriptKind::Rotor, geometry)
        .replace("{{D2_MM}}", &fmt_mm(geometry.outer_diameter_mm))
        .replace("{{D2_M}}", &fmt_m(geometry.outer_diameter_mm))
        .replace("{{DH_MM}}", &fmt_mm(geometry.hub_diameter_mm))
        .replace("{{DH_M}}", &fmt_m(geometry.hub_diameter_mm))
        .replace("{{THK_MM}}", &fmt_mm(ROTOR_PLATE_THICKNESS_MM))
        .replace("{{THK_M}}", &fmt_m(ROTOR_PLATE_THICKNESS_MM))
        .replace("{{Z}}", &geometry.blade_count.to_string())
        .replace("{{BLADES}}", &blade_lines(geometry, "objBladeProfile.Lines2d"))
        .replace("{{TEXT_Y}}", &fmt_m(text_y))
        .replace("{{D2_LABEL}}", &fmt_label(geometry.outer_diameter_mm))
        .replace("{{THK_LABEL}}", &fmt_label(ROTOR_PLATE_THICKNESS_MM))
}
