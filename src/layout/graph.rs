//! LayoutGraph: a requirement graph flattened into a petgraph DiGraph.
//!
//! Node set is the union of graph keys and edge endpoints. Each requirement
//! edge becomes one directed layout edge whose orientation comes from
//! [`EdgeDirection`]; duplicates (same [`EdgeId`]) collapse to one.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::catalog::is_admission;
use crate::config::{EdgeDirection, LayoutOptions};
use crate::graph::{RequirementEdge, RequirementGraph, RequirementKind};

static EDGE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(pe|ce)-([^-]+)-([^-]+)$").expect("edge id pattern compiles")
});

// ─── EdgeId ───────────────────────────────────────────────────────────────────

/// Identity of a layout edge: `pe-<base>-<other>` or `ce-<base>-<other>`.
///
/// Course codes never contain `-`, so the textual form round-trips.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    pub kind: RequirementKind,
    pub base: String,
    pub other: String,
}

impl EdgeId {
    pub fn new(kind: RequirementKind, base: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            kind,
            base: base.into(),
            other: other.into(),
        }
    }

    /// Parse the textual form. Node ids (plain course codes) return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = EDGE_ID_RE.captures(s)?;
        let kind = RequirementKind::from_edge_prefix(&caps[1])?;
        Some(Self::new(kind, &caps[2], &caps[3]))
    }

    #[cfg(test)]
    pub fn touches(&self, id: &str) -> bool {
        self.base == id || self.other == id
    }
}

impl From<&RequirementEdge> for EdgeId {
    fn from(edge: &RequirementEdge) -> Self {
        Self::new(edge.kind, edge.base.clone(), edge.other.clone())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.kind.edge_prefix(), self.base, self.other)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── LayoutGraph ──────────────────────────────────────────────────────────────

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: String,
}

/// Edge data stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub id: EdgeId,
}

pub struct LayoutGraph {
    pub digraph: DiGraph<NodeData, EdgeData>,
    pub direction: EdgeDirection,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl LayoutGraph {
    /// Build the layout graph for `graph` under `options`.
    ///
    /// With `hide_admission`, the admission sentinel and every edge touching
    /// it are left out.
    pub fn from_requirements(graph: &RequirementGraph, options: &LayoutOptions) -> Self {
        let mut digraph: DiGraph<NodeData, EdgeData> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();
        let hidden = |id: &str| options.hide_admission && is_admission(id);

        for id in graph.node_ids() {
            if !hidden(id) {
                ensure_node(&mut digraph, &mut node_index, id);
            }
        }

        let mut seen: HashSet<EdgeId> = HashSet::new();
        for edge in graph.edges() {
            if hidden(&edge.base) || hidden(&edge.other) {
                continue;
            }
            let id = EdgeId::from(&edge);
            if !seen.insert(id.clone()) {
                continue;
            }
            let (source, target) = options.direction.orient(&edge.base, &edge.other);
            ensure_node(&mut digraph, &mut node_index, source);
            ensure_node(&mut digraph, &mut node_index, target);
            digraph.add_edge(node_index[source], node_index[target], EdgeData { id });
        }

        Self {
            digraph,
            direction: options.direction,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    #[cfg(test)]
    pub fn is_dag(&self) -> bool {
        !petgraph::algo::is_cyclic_directed(&self.digraph)
    }

    /// Node ids in insertion order (sorted by course code).
    pub fn node_ids(&self) -> Vec<&str> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].id.as_str())
            .collect()
    }

    /// Edges as (edge id, source id, target id) in insertion order.
    pub fn edges(&self) -> Vec<(&EdgeId, &str, &str)> {
        self.digraph
            .edge_indices()
            .filter_map(|eidx| {
                let (s, t) = self.digraph.edge_endpoints(eidx)?;
                Some((
                    &self.digraph[eidx].id,
                    self.digraph[s].id.as_str(),
                    self.digraph[t].id.as_str(),
                ))
            })
            .collect()
    }

    #[cfg(test)]
    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    #[cfg(test)]
    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }
}

fn ensure_node(
    digraph: &mut DiGraph<NodeData, EdgeData>,
    node_index: &mut HashMap<String, NodeIndex>,
    node_id: &str,
) {
    if !node_index.contains_key(node_id) {
        let idx = digraph.add_node(NodeData {
            id: node_id.to_string(),
        });
        node_index.insert(node_id.to_string(), idx);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
