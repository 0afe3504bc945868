//! Layout types: Point, LayoutNode, LayoutEdge, LayoutResult.

use serde::Serialize;

use super::graph::EdgeId;
use crate::config::LayoutOptions;
use crate::graph::RequirementKind;

// ─── Constants ────────────────────────────────────────────────────────────────

pub const DUMMY_PREFIX: &str = "__dummy_";

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A course node with its computed position (top-left corner) and size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Layer index, or `None` when the engine gave no geometry for this node.
    pub layer: Option<usize>,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            position,
            width,
            height,
            layer: None,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }
}

// ─── LayoutEdge ───────────────────────────────────────────────────────────────

/// A requirement edge in the layout, with its orthogonal route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub id: EdgeId,
    pub source: String,
    pub target: String,
    pub waypoints: Vec<Point>,
}

impl LayoutEdge {
    pub fn kind(&self) -> RequirementKind {
        self.id.kind
    }

    /// The course that holds the requirement.
    pub fn base(&self) -> &str {
        &self.id.base
    }

    /// The required course.
    pub fn other(&self) -> &str {
        &self.id.other
    }
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// Output of `layout()`: positioned nodes and routed edges, plus the options
/// they were computed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub options: LayoutOptions,
}

impl LayoutResult {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&LayoutEdge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    /// Bounding box (width, height) of all nodes.
    #[cfg(test)]
    pub fn extent(&self) -> (f64, f64) {
        let w = self
            .nodes
            .iter()
            .map(|n| n.position.x + n.width)
            .fold(0.0, f64::max);
        let h = self
            .nodes
            .iter()
            .map(|n| n.position.y + n.height)
            .fold(0.0, f64::max);
        (w, h)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
