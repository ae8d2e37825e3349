//! Casing sheet-metal automation script (`Create_Casing.vbs`).
//!
//! Builds a 3 mm tab from the closed volute polyline and cuts the suction
//! opening at D1.

use super::{fill_vbs_common, vbs_polygon, ScriptKind};
use crate::geometry::{fmt_label, fmt_m, fmt_mm, ScriptGeometry, CASING_SHEET_THICKNESS_MM};

/// Annotation offset beyond the scroll (m)
const TEXT_OFFSET_M: f64 = 0.05;

/// Cutout depth through the sheet (m)
const SUCTION_CUT_DEPTH_M: &str = "0.01";

const TEMPLATE: &str = r#"{{BANNER}}
' Casing Sheet Metal Generator
Option Explicit

Dim objApp, objDoc, objProfile, objTab, objCutout
Dim SuctionDia, Thk

{{CONNECT}}

Set objDoc = objApp.Documents.Add("SolidEdge.SheetMetalDocument")

' Cutoff Radius = {{CUTOFF_MM}} mm
' Scroll Growth = {{GROWTH_MM}} mm
' Suction Opening = {{D1_MM}} mm
SuctionDia = {{D1_M}}
' Thickness = {{THK_MM}} mm
Thk = {{THK_M}}

' 1. Scroll Profile
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
{{SCROLL}}
Set objTab = objDoc.Models.AddFiniteTab(objProfile, 1, Thk)
objProfile.Visible = False

' 2. Suction Opening
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.Circles2d.AddByCenterRadius(0, 0, SuctionDia / 2)
Set objCutout = objDoc.Models.AddFiniteCutout(objProfile, 1, {{CUT_DEPTH}})
objProfile.Visible = False

' 3. Annotation
Set objProfile = objDoc.ProfileSets.Add.Profiles.Add(objDoc.RefPlanes.Item(1))
Call objProfile.TextBoxes2d.Add(0, {{TEXT_Y}}, 0, "Thk={{THK_LABEL}}mm Suction={{D1_LABEL}}mm")
objProfile.Visible = True

{{FIT_VIEW}}
"#;

/// Render the casing script
pub fn render(geometry: &ScriptGeometry) -> String {
    let scroll = vbs_polygon("objProfile.Lines2d", &geometry.volute_points()).join("\n");
    let text_y = geometry.cutoff_radius_mm + geometry.volute_growth_mm + TEXT_OFFSET_M * 1000.0;

    fill_vbs_common(TEMPLATE, ScriptKind::Casing, geometry)
        .replace("{{CUTOFF_MM}}", &fmt_mm(geometry.cutoff_radius_mm))
        .replace("{{GROWTH_MM}}", &fmt_mm(geometry.volute_growth_mm))
        .replace("{{D1_MM}}", &fmt_mm(geometry.inlet_diameter_mm))
        .replace("{{D1_M}}", &fmt_m(geometry.inlet_diameter_mm))
        .replace("{{THK_MM}}", &fmt_mm(CASING_SHEET_THICKNESS_MM))
        .replace("{{THK_M}}", &fmt_m(CASING_SHEET_THICKNESS_MM))
        .replace("{{SCROLL}}", &scroll)
        .replace("{{CUT_DEPTH}}", SUCTION_CUT_DEPTH_M)
        .replace("{{TEXT_Y}}", &fmt_m(text_y))
        .replace("{{THK_LABEL}}", &fmt_label(CASING_SHEET_THICKNESS_MM))
        .replace("{{D1_LABEL}}", &fmt_label(geometry.inlet_diameter_mm))
}
