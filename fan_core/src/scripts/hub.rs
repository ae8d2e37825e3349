//! Hub part automation script (`Create_Hub.vbs`).
//!
//! Extrudes the hub cylinder by the hub width, then cuts the shaft bore and
//! keyway through twice that width.

use super::{fill_vbs_common, vbs_polygon, ScriptKind};
use crate::geometry::{fmt_m, fmt_mm, ScriptGeometry};

/// Annotation offset above the hub rim (m)
const TEXT_OFFSET_M: f64 = 0.02;

const TEMPLATE: &str = r#"{{BANNER}}
' Hub Part Generator
Option Explicit

Dim objApp, objDoc, objProfile, objExtrusion, objCutout
Dim Dh, Shaft, Width

{{CONNECT}}

Set objDoc = objApp.Documents.Add("SolidEdge.PartDocument")

' Hub Diameter = {{DH_MM}} mm
Dh = {{DH_M}}
' Shaft Diameter = {{SHAFT_MM}} mm
Shaft = {{SHAFT_M}}
' Hub Width = 1.5 x b2 = {{WIDTH_MM}} mm
Width = {{WIDTH_M}}
' Keyway = {{KEY_W_MM}} x {{KEY_H_MM}} mm

' 1. Hub Cylinder
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.Circles2d.AddByCenterRadius(0, 0, Dh / 2)
Set objExtrusion = objDoc.Models.AddFiniteExtrudedProtrusion(1, objProfile, 0, Width)
objProfile.Visible = False

' 2. Shaft Bore with Keyway
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.Circles2d.AddByCenterRadius(0, 0, Shaft / 2)
{{KEYWAY}}
Set objCutout = objDoc.Models.AddFiniteExtrudedCutout(1, objProfile, 0, Width * 2)
objProfile.Visible = False

' 3. Annotation
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.TextBoxes2d.Add(0, {{TEXT_Y}}, 0, "Hub D={{DH_MM}}mm H={{WIDTH_MM}}mm")
objProfile.Visible = True

{{FIT_VIEW}}
"#;

/// Render the hub script
pub fn render(geometry: &ScriptGeometry) -> String {
    let keyway = vbs_polygon("objProfile.Lines2d", &geometry.keyway_points()).join("\n");
    let text_y = geometry.hub_diameter_mm / 2.0 + TEXT_OFFSET_M * 1000.0;

    fill_vbs_common(TEMPLATE, ScriptKind::Hub, geometry)
        .replace("{{DH_MM}}", &fmt_mm(geometry.hub_diameter_mm))
        .replace("{{DH_M}}", &fmt_m(geometry.hub_diameter_mm))
        .replace("{{SHAFT_MM}}", &fmt_mm(geometry.shaft_diameter_mm))
        .replace("{{SHAFT_M}}", &fmt_m(geometry.shaft_diameter_mm))
        .replace("{{WIDTH_MM}}", &fmt_mm(geometry.hub_width_mm))
        .replace("{{WIDTH_M}}", &fmt_m(geometry.hub_width_mm))
        .replace("{{KEY_W_MM}}", &fmt_mm(geometry.key_width_mm))
        .replace("{{KEY_H_MM}}", &fmt_mm(geometry.key_height_mm))
        .replace("{{KEYWAY}}", &keyway)
        .replace("{{TEXT_Y}}", &fmt_m(text_y))
}
