//! Layout: requirement graph → positioned nodes and routed edges.
//!
//! [`layout`] runs the built-in [`SugiyamaLayout`]; [`layout_with`] accepts
//! any [`LayoutEngine`]. When an engine fails, or omits a node, the pipeline
//! still returns every node: missing geometry falls back to the origin.

pub mod graph;
pub mod sugiyama;
pub mod types;

use std::collections::HashMap;

pub use graph::{EdgeId, LayoutGraph};
pub use sugiyama::SugiyamaLayout;
pub use types::{LayoutEdge, LayoutNode, LayoutResult, Point};

use crate::config::LayoutOptions;
use crate::error::LayoutError;
use crate::graph::RequirementGraph;

/// Where an engine put one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePlacement {
    pub position: Point,
    pub layer: usize,
}

/// Raw engine output, keyed by node id and edge id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    pub positions: HashMap<String, NodePlacement>,
    pub routes: HashMap<EdgeId, Vec<Point>>,
}

/// A layered graph layout engine.
pub trait LayoutEngine {
    fn place(&self, graph: &LayoutGraph, options: &LayoutOptions) -> Result<Placement, LayoutError>;
}

/// Lay out `graph` with the built-in Sugiyama engine.
pub fn layout(graph: &RequirementGraph, options: &LayoutOptions) -> LayoutResult {
    layout_with(&SugiyamaLayout, graph, options)
}

/// Lay out `graph` with `engine`.
///
/// Nodes come out in course-code order, edges in the graph's edge order
/// (prerequisites then corequisites) with duplicates removed.
pub fn layout_with<E>(engine: &E, graph: &RequirementGraph, options: &LayoutOptions) -> LayoutResult
where
    E: LayoutEngine + ?Sized,
{
    let lg = LayoutGraph::from_requirements(graph, options);

    let placement = match engine.place(&lg, options) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(error = %err, nodes = lg.node_count(), "layout failed; placing nodes at origin");
            Placement::default()
        }
    };

    let mut missing = 0usize;
    let nodes = lg
        .node_ids()
        .into_iter()
        .map(|id| {
            let placed = placement.positions.get(id);
            if placed.is_none() {
                missing += 1;
            }
            LayoutNode {
                id: id.to_string(),
                position: placed.map_or(Point::ORIGIN, |p| p.position),
                width: options.node_width,
                height: options.node_height,
                layer: placed.map(|p| p.layer),
            }
        })
        .collect();
    if missing > 0 {
        tracing::debug!(missing, "nodes without geometry defaulted to origin");
    }

    let edges = lg
        .edges()
        .into_iter()
        .map(|(id, source, target)| LayoutEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            waypoints: placement.routes.get(id).cloned().unwrap_or_default(),
        })
        .collect();

    LayoutResult {
        nodes,
        edges,
        options: options.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
