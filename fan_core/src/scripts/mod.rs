//! # CAD Script Generation
//!
//! Serializes a [`ScriptGeometry`] into plain-text scripts for two CAD hosts:
//!
//! - [`drafting`] - 2D command script (`.scr`) with a polar blade array
//! - [`hub`] - 3D part: hub cylinder with keyed shaft bore (`.vbs`)
//! - [`rotor`] - 3D part: backplate with blade marking sketch (`.vbs`)
//! - [`casing`] - 3D sheet-metal volute shell (`.vbs`)
//! - [`draft`] - 3D host 2D draft sheet of the impeller (`.vbs`)
//!
//! Every script opens with the same parameter banner and takes its numbers
//! from the geometry's formatters, so a value printed in one script is
//! printed identically in all of them.
//!
//! ## Example
//!
//! ```rust
//! use fan_core::{design, FanInput};
//!
//! let result = design(&FanInput::default());
//! for (kind, text) in result.scripts.iter() {
//!     println!("{} ({} bytes)", kind.file_name(), text.len());
//! }
//! ```

pub mod casing;
pub mod draft;
pub mod drafting;
pub mod hub;
pub mod rotor;

use serde::{Deserialize, Serialize};

use crate::geometry::{fmt_m, Point, ScriptGeometry};

/// Role of a generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptKind {
    /// 2D drafting command script
    Drafting,
    /// Hub solid part
    Hub,
    /// Rotor backplate solid part
    Rotor,
    /// Sheet-metal casing
    Casing,
    /// 2D draft document in the 3D host
    Draft,
}

impl ScriptKind {
    /// All script kinds, in generation order
    pub const ALL: [ScriptKind; 5] = [
        ScriptKind::Drafting,
        ScriptKind::Hub,
        ScriptKind::Rotor,
        ScriptKind::Casing,
        ScriptKind::Draft,
    ];

    /// Fixed output file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptKind::Drafting => "fan_design.scr",
            ScriptKind::Hub => "Create_Hub.vbs",
            ScriptKind::Rotor => "Create_Rotor.vbs",
            ScriptKind::Casing => "Create_Casing.vbs",
            ScriptKind::Draft => "Create_Draft.vbs",
        }
    }

    /// Comment prefix of the script language
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            ScriptKind::Drafting => ";",
            _ => "'",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptKind::Drafting => "2D Drafting Script",
            ScriptKind::Hub => "Hub Part",
            ScriptKind::Rotor => "Rotor Part",
            ScriptKind::Casing => "Casing Sheet Metal",
            ScriptKind::Draft => "2D Draft Sheet",
        }
    }
}

impl std::fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All generated scripts for one design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSet {
    pub drafting: String,
    pub hub: String,
    pub rotor: String,
    pub casing: String,
    pub draft: String,
}

impl ScriptSet {
    /// Render every script from one geometry
    pub fn generate(geometry: &ScriptGeometry) -> Self {
        ScriptSet {
            drafting: drafting::render(geometry),
            hub: hub::render(geometry),
            rotor: rotor::render(geometry),
            casing: casing::render(geometry),
            draft: draft::render(geometry),
        }
    }

    /// Script text for a kind
    pub fn get(&self, kind: ScriptKind) -> &str {
        match kind {
            ScriptKind::Drafting => &self.drafting,
            ScriptKind::Hub => &self.hub,
            ScriptKind::Rotor => &self.rotor,
            ScriptKind::Casing => &self.casing,
            ScriptKind::Draft => &self.draft,
        }
    }

    /// `(kind, text)` pairs in generation order
    pub fn iter(&self) -> impl Iterator<Item = (ScriptKind, &str)> {
        ScriptKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

// ============================================================================
// Shared VBScript pieces
// ============================================================================

/// Attach to a running 3D host or start one
const VBS_CONNECT: &str = r#"On Error Resume Next
Set objApp = GetObject(, "SolidEdge.Application")
If Err Then
    Err.Clear
    Set objApp = CreateObject("SolidEdge.Application")
    objApp.Visible = True
End If
On Error GoTo 0"#;

/// Fit view command id of the 3D host
const VBS_FIT_VIEW: &str = "objApp.StartCommand 32793";

/// Banner comment line for a script kind
fn banner_line(kind: ScriptKind, geometry: &ScriptGeometry) -> String {
    format!("{} {}", kind.comment_prefix(), geometry.parameter_banner())
}

/// Fill the placeholders every VBScript template shares
fn fill_vbs_common(template: &str, kind: ScriptKind, geometry: &ScriptGeometry) -> String {
    template
        .replace("{{BANNER}}", &banner_line(kind, geometry))
        .replace("{{CONNECT}}", VBS_CONNECT)
        .replace("{{FIT_VIEW}}", VBS_FIT_VIEW)
}

/// `AddBy2Points` call on `target` for a segment, coordinates in metres
fn vbs_segment(target: &str, from: Point, to: Point) -> String {
    format!(
        "Call {target}.AddBy2Points({}, {}, {}, {})",
        fmt_m(from.x),
        fmt_m(from.y),
        fmt_m(to.x),
        fmt_m(to.y)
    )
}

/// Segments joining consecutive points
fn vbs_polyline(target: &str, points: &[Point]) -> Vec<String> {
    points
        .windows(2)
        .map(|pair| vbs_segment(target, pair[0], pair[1]))
        .collect()
}

/// Segments of a closed polygon, including the closing edge
fn vbs_polygon(target: &str, points: &[Point]) -> Vec<String> {
    let mut lines = vbs_polyline(target, points);
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if points.len() > 2 {
            lines.push(vbs_segment(target, last, first));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_unique() {
        let mut names: Vec<&str> = ScriptKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ScriptKind::ALL.len());
    }

    #[test]
    fn test_vbs_segment_in_metres() {
        let line = vbs_segment(
            "objLines",
            Point { x: 107.815, y: 0.0 },
            Point { x: -3.0, y: 13.0 },
        );
        assert_eq!(line, "Call objLines.AddBy2Points(0.107815, 0.000000, -0.003000, 0.013000)");
    }

    #[test]
    fn test_vbs_polygon_closes() {
        let square = [
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            Point { x: 1.0, y: 1.0 },
            Point { x: 0.0, y: 1.0 },
        ];
        let lines = vbs_polygon("p", &square);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Call p.AddBy2Points(0.000000, 0.001000, 0.000000, 0.000000)");
    }
}
