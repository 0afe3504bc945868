//! Visual rules: subject colours, language flags, edge strokes.

use serde::Serialize;

use crate::catalog::subject_of;
use crate::graph::RequirementKind;

pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
pub const EDGE_STROKE: &str = "white";
pub const COREQ_DASH: &str = "10, 6";
pub const HIGHLIGHT_BORDER: &str = "white";

/// Background colour for a course, keyed by its three-letter subject.
pub fn subject_color(course_no: &str) -> &'static str {
    match subject_of(course_no) {
        // arts
        "MUS" => "rgb(128, 0, 255)",
        "ART" => "rgb(179, 0, 255)",
        "DAN" => "rgb(238, 0, 255)",
        "THR" => "rgb(255, 0, 174)",
        // humanities
        "ENG" => "rgb(154, 29, 46)",
        "HIS" => "rgb(250, 100, 20)",
        "REL" => "rgb(255, 160, 0)",
        "ANT" => "rgb(255, 210, 0)",
        // classics
        "LAT" => "rgb(73, 15, 112)",
        "GRK" => "rgb(128, 128, 0)",
        // stem
        "BIO" | "EPS" => "rgb(20, 185, 0)",
        "CHE" => "rgb(0, 255, 140)",
        "PHY" => "rgb(4, 230, 255)",
        "MAT" => "rgb(5, 150, 255)",
        "CSC" => "rgb(0, 40, 255)",
        "ECO" | "HHD" | "PEC" | "INT" | "EXI" | "PSY" => "rgb(255, 255, 255)",
        _ => TRANSPARENT,
    }
}

/// Flag background for modern-language courses, empty otherwise.
pub fn subject_image(course_no: &str) -> &'static str {
    match subject_of(course_no) {
        "ARA" => "url(/images/algeria.png)",
        "CHI" => "url(/images/china.png)",
        "FRE" => "url(/images/france.png)",
        "GER" => "url(/images/germany.png)",
        "ITA" => "url(/images/italy.png)",
        "JPN" => "url(/images/japan.png)",
        "RUS" => "url(/images/russia.png)",
        "SPA" => "url(/images/spain.png)",
        _ => "",
    }
}

/// Glow applied to emphasised nodes.
pub fn glow(color: &str) -> String {
    format!("0 0 25px {color}")
}

// ─── EdgeStyle ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke_width: f64,
    /// Empty for solid strokes.
    pub stroke_dasharray: String,
    pub stroke: String,
}

impl EdgeStyle {
    pub fn plain(kind: RequirementKind) -> Self {
        let stroke_width = match kind {
            RequirementKind::Prerequisite => 1.0,
            RequirementKind::Corequisite => 0.5,
        };
        Self {
            stroke_width,
            stroke_dasharray: dasharray(kind).to_string(),
            stroke: EDGE_STROKE.to_string(),
        }
    }

    pub fn highlighted(kind: RequirementKind, color: &str) -> Self {
        let stroke_width = match kind {
            RequirementKind::Prerequisite => 5.0,
            RequirementKind::Corequisite => 4.5,
        };
        Self {
            stroke_width,
            stroke_dasharray: dasharray(kind).to_string(),
            stroke: color.to_string(),
        }
    }
}

fn dasharray(kind: RequirementKind) -> &'static str {
    match kind {
        RequirementKind::Prerequisite => "",
        RequirementKind::Corequisite => COREQ_DASH,
    }
}

// ─── NodeStyle ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background_color: String,
    pub background_image: String,
    /// Empty unless the node is emphasised.
    pub box_shadow: String,
    pub border_color: String,
}

impl NodeStyle {
    pub fn emphasise(&mut self, color: &str) {
        self.box_shadow = glow(color);
        self.border_color = HIGHLIGHT_BORDER.to_string();
    }

    pub fn is_emphasised(&self) -> bool {
        !self.box_shadow.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_render_style.rs"]
mod tests;
