//! Render model: positioned, styled nodes and edges for a graph widget.
//!
//! The highlight pass is direction-sensitive. With a focused course `F`,
//! only edges whose base is `F` (edges to what `F` requires) are
//! highlighted. Those edges are drawn last, and their other endpoints plus
//! `F` itself get a glow.

pub mod style;

use std::collections::BTreeSet;

use serde::Serialize;

pub use style::{EdgeStyle, NodeStyle, subject_color, subject_image};

use crate::graph::RequirementKind;
use crate::layout::{EdgeId, LayoutEdge, LayoutResult, Point};

/// Supplies per-node label and colours.
pub trait NodeStyler {
    fn label(&self, course_no: &str) -> String {
        course_no.to_string()
    }

    /// Base colour; also the highlight colour when this course is focused.
    fn color(&self, course_no: &str) -> String;

    fn image(&self, course_no: &str) -> String {
        let _ = course_no;
        String::new()
    }
}

/// Colours and flags by subject prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectStyler;

impl NodeStyler for SubjectStyler {
    fn color(&self, course_no: &str) -> String {
        subject_color(course_no).to_string()
    }

    fn image(&self, course_no: &str) -> String {
        subject_image(course_no).to_string()
    }
}

// ─── Render model ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub highlighted: bool,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge {
    pub id: EdgeId,
    pub kind: RequirementKind,
    pub source: String,
    pub target: String,
    pub waypoints: Vec<Point>,
    pub highlighted: bool,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderModel {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderModel {
    pub fn node(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&RenderEdge> {
        self.edges.iter().find(|e| e.id.to_string() == id)
    }

    pub fn highlighted_nodes(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.highlighted)
            .map(|n| n.id.as_str())
            .collect()
    }

    pub fn highlighted_edges(&self) -> Vec<&EdgeId> {
        self.edges
            .iter()
            .filter(|e| e.highlighted)
            .map(|e| &e.id)
            .collect()
    }
}

/// Render `layout` with subject colours.
pub fn render(layout: &LayoutResult, highlight: Option<&str>) -> RenderModel {
    render_with(&SubjectStyler, layout, highlight)
}

/// Render `layout` with a caller-supplied styler.
///
/// An empty highlight id is the same as none.
pub fn render_with<S>(styler: &S, layout: &LayoutResult, highlight: Option<&str>) -> RenderModel
where
    S: NodeStyler + ?Sized,
{
    let focus = highlight.filter(|id| !id.is_empty());
    let focus_color = focus.map(|id| styler.color(id));

    let (focused, rest): (Vec<&LayoutEdge>, Vec<&LayoutEdge>) = layout
        .edges
        .iter()
        .partition(|e| focus.is_some_and(|f| e.base() == f));

    let mut emphasised: BTreeSet<&str> = focused.iter().map(|e| e.other()).collect();
    emphasised.extend(focus);

    let mut edges: Vec<RenderEdge> = rest
        .into_iter()
        .map(|e| render_edge(e, EdgeStyle::plain(e.kind()), false))
        .collect();
    if let Some(color) = &focus_color {
        edges.extend(
            focused
                .into_iter()
                .map(|e| render_edge(e, EdgeStyle::highlighted(e.kind(), color), true)),
        );
    }

    let nodes = layout
        .nodes
        .iter()
        .map(|n| {
            let mut style = NodeStyle {
                background_color: styler.color(&n.id),
                background_image: styler.image(&n.id),
                ..NodeStyle::default()
            };
            let highlighted = emphasised.contains(n.id.as_str());
            if let (true, Some(color)) = (highlighted, &focus_color) {
                style.emphasise(color);
            }
            RenderNode {
                id: n.id.clone(),
                label: styler.label(&n.id),
                position: n.position,
                width: n.width,
                height: n.height,
                highlighted,
                style,
            }
        })
        .collect();

    if let Some(f) = focus {
        tracing::trace!(focus = f, emphasised = emphasised.len(), "highlight pass");
    }

    RenderModel { nodes, edges }
}

fn render_edge(edge: &LayoutEdge, style: EdgeStyle, highlighted: bool) -> RenderEdge {
    RenderEdge {
        id: edge.id.clone(),
        kind: edge.kind(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        waypoints: edge.waypoints.clone(),
        highlighted,
        style,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_render.rs"]
mod tests;
