//! Sugiyama layered graph layout.
//!
//! Phases:
//!   1. Cycle removal (greedy-FAS)
//!   2. Layer assignment (longest path)
//!   3. Dummy node insertion
//!   4. Crossing minimisation (barycenter)
//!   5. Coordinate assignment
//!   6. Edge routing (orthogonal)
//!
//! Every phase iterates ordered collections, so the same graph always gets
//! the same coordinates.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::graph::{EdgeId, LayoutGraph};
use super::types::{DUMMY_PREFIX, Point};
use super::{LayoutEngine, NodePlacement, Placement};
use crate::config::LayoutOptions;
use crate::error::LayoutError;

// ─── Geometry constants ──────────────────────────────────────────────────────

/// Width reserved for a dummy node in its layer.
pub const DUMMY_WIDTH: f64 = 10.0;
const MAX_PASSES: usize = 24;

// ─── Mini-graph helpers ───────────────────────────────────────────────────────

#[derive(Default)]
struct Adjacency {
    out: Vec<String>,
    inc: Vec<String>,
}

/// Adjacency-list view of the layout graph used inside the phases.
#[derive(Default)]
pub struct AdjGraph {
    /// Insertion order; the phases rely on it for stable tie-breaking.
    nodes: Vec<String>,
    adjacency: HashMap<String, Adjacency>,
    /// (src, tgt); the id is `None` for dummy chain segments.
    edges: Vec<(String, String, Option<EdgeId>)>,
}

impl AdjGraph {
    fn new() -> Self {
        Self::default()
    }

    fn from_layout_graph(lg: &LayoutGraph) -> Self {
        let mut ag = Self::new();
        lg.node_ids().into_iter().for_each(|id| ag.add_node(id));
        for (edge_id, src, tgt) in lg.edges() {
            ag.add_edge(src, tgt, Some(edge_id.clone()));
        }
        ag
    }

    fn add_node(&mut self, id: &str) {
        if self.adjacency.contains_key(id) {
            return;
        }
        self.nodes.push(id.to_owned());
        self.adjacency.insert(id.to_owned(), Adjacency::default());
    }

    fn add_edge(&mut self, src: &str, tgt: &str, id: Option<EdgeId>) {
        self.adjacency.entry(src.to_owned()).or_default().out.push(tgt.to_owned());
        self.adjacency.entry(tgt.to_owned()).or_default().inc.push(src.to_owned());
        self.edges.push((src.to_owned(), tgt.to_owned(), id));
    }

    fn successors_of(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], |a| a.out.as_slice())
    }

    fn predecessors_of(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], |a| a.inc.as_slice())
    }
}

// ─── Cycle Removal (Greedy-FAS) ─────────────────────────────────────────────

/// Degrees of the nodes still in play during greedy-FAS.
struct ActiveSet<'a> {
    ag: &'a AdjGraph,
    /// BTreeSet so ties always break on course code.
    nodes: BTreeSet<&'a str>,
    out_deg: HashMap<&'a str, i64>,
    in_deg: HashMap<&'a str, i64>,
}

impl<'a> ActiveSet<'a> {
    fn new(ag: &'a AdjGraph) -> Self {
        let nodes: BTreeSet<&str> = ag.nodes.iter().map(String::as_str).collect();
        let out_deg = nodes
            .iter()
            .map(|&n| (n, ag.successors_of(n).len() as i64))
            .collect();
        let in_deg = nodes
            .iter()
            .map(|&n| (n, ag.predecessors_of(n).len() as i64))
            .collect();
        Self {
            ag,
            nodes,
            out_deg,
            in_deg,
        }
    }

    fn out_of(&self, n: &str) -> i64 {
        self.out_deg.get(n).copied().unwrap_or(0)
    }

    fn in_of(&self, n: &str) -> i64 {
        self.in_deg.get(n).copied().unwrap_or(0)
    }

    /// Take `n` out of play and update its neighbours' degrees.
    fn detach(&mut self, n: &'a str) {
        self.nodes.remove(n);
        let ag = self.ag;
        for succ in ag.successors_of(n) {
            if self.nodes.contains(succ.as_str()) {
                if let Some(d) = self.in_deg.get_mut(succ.as_str()) {
                    *d -= 1;
                }
            }
        }
        for pred in ag.predecessors_of(n) {
            if self.nodes.contains(pred.as_str()) {
                if let Some(d) = self.out_deg.get_mut(pred.as_str()) {
                    *d -= 1;
                }
            }
        }
    }

    /// Detach every node matching `pick`, in rounds, until none is left.
    fn drain_where(&mut self, pick: impl Fn(&Self, &str) -> bool, into: &mut Vec<&'a str>) {
        loop {
            let this = &*self;
            let round: Vec<&'a str> = this
                .nodes
                .iter()
                .copied()
                .filter(|&n| pick(this, n))
                .collect();
            if round.is_empty() {
                return;
            }
            for n in round {
                self.detach(n);
                into.push(n);
            }
        }
    }
}

/// Compute a node ordering using the greedy-FAS heuristic.
fn greedy_fas_ordering(ag: &AdjGraph) -> Vec<String> {
    let mut active = ActiveSet::new(ag);
    let mut head: Vec<&str> = Vec::new();
    let mut tail: Vec<&str> = Vec::new();

    while !active.nodes.is_empty() {
        active.drain_where(|a, n| a.out_of(n) == 0, &mut tail);
        active.drain_where(|a, n| a.in_of(n) == 0, &mut head);
        let best = active
            .nodes
            .iter()
            .copied()
            .max_by_key(|n| active.out_of(n) - active.in_of(n));
        if let Some(best) = best {
            active.detach(best);
            head.push(best);
        }
    }

    head.into_iter()
        .chain(tail.into_iter().rev())
        .map(str::to_owned)
        .collect()
}

/// Remove cycles. Returns the DAG and the set of (src, tgt) edges that were
/// reversed to get it. Self-loops are dropped from the DAG.
fn remove_cycles(ag: &AdjGraph) -> (AdjGraph, HashSet<(String, String)>) {
    if ag.nodes.is_empty() {
        return (AdjGraph::new(), HashSet::new());
    }

    let ordering = greedy_fas_ordering(ag);
    let position: HashMap<&str, usize> = ordering
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let mut reversed_edges: HashSet<(String, String)> = HashSet::new();
    for (src, tgt, _) in &ag.edges {
        if src == tgt {
            continue;
        }
        let src_pos = position.get(src.as_str()).copied().unwrap_or(0);
        let tgt_pos = position.get(tgt.as_str()).copied().unwrap_or(0);
        if src_pos > tgt_pos {
            reversed_edges.insert((src.clone(), tgt.clone()));
        }
    }

    let mut dag = AdjGraph::new();
    for node_id in &ag.nodes {
        dag.add_node(node_id);
    }
    for (src, tgt, id) in &ag.edges {
        if src == tgt {
            continue;
        }
        if reversed_edges.contains(&(src.clone(), tgt.clone())) {
            dag.add_edge(tgt, src, id.clone());
        } else {
            dag.add_edge(src, tgt, id.clone());
        }
    }

    (dag, reversed_edges)
}

// ─── Layer Assignment ────────────────────────────────────────────────────────

pub struct LayerAssignment {
    pub layers: HashMap<String, usize>,
    pub layer_count: usize,
}

impl LayerAssignment {
    /// Longest-path layering of a DAG: every edge goes down at least one layer.
    fn assign(dag: &AdjGraph) -> Self {
        let mut layers: HashMap<String, usize> =
            dag.nodes.iter().map(|n| (n.clone(), 0)).collect();

        let mut changed = true;
        while changed {
            changed = false;
            for (src, tgt, _) in &dag.edges {
                let src_layer = layers.get(src).copied().unwrap_or(0);
                let tgt_layer = layers.entry(tgt.clone()).or_insert(0);
                if *tgt_layer < src_layer + 1 {
                    *tgt_layer = src_layer + 1;
                    changed = true;
                }
            }
        }

        let layer_count = layers.values().copied().max().map_or(1, |m| m + 1);
        Self {
            layers,
            layer_count,
        }
    }
}

// ─── Dummy Node Insertion ────────────────────────────────────────────────────

pub struct DummyEdge {
    pub original_src: String,
    pub original_tgt: String,
    pub dummy_ids: Vec<String>,
}

pub struct AugmentedGraph {
    pub ag: AdjGraph,
    pub layers: HashMap<String, usize>,
    pub layer_count: usize,
    pub dummy_edges: Vec<DummyEdge>,
}

/// Split every edge spanning more than one layer into a chain through
/// dummy nodes, one per intermediate layer.
fn insert_dummy_nodes(dag: &AdjGraph, la: &LayerAssignment) -> AugmentedGraph {
    let mut new_ag = AdjGraph::new();
    for node_id in &dag.nodes {
        new_ag.add_node(node_id);
    }

    let mut layers = la.layers.clone();
    let mut dummy_edges: Vec<DummyEdge> = Vec::new();

    for (src_id, tgt_id, id) in &dag.edges {
        let src_layer = layers.get(src_id).copied().unwrap_or(0);
        let tgt_layer = layers.get(tgt_id).copied().unwrap_or(0);
        let layer_diff = tgt_layer.saturating_sub(src_layer).max(1);

        if layer_diff <= 1 {
            new_ag.add_edge(src_id, tgt_id, id.clone());
            continue;
        }

        let chain = dummy_edges.len();
        let mut dummy_ids: Vec<String> = Vec::new();
        let mut chain_prev = src_id.clone();
        for i in 0..layer_diff - 1 {
            let dummy_id = format!("{DUMMY_PREFIX}{chain}_{i}");
            new_ag.add_node(&dummy_id);
            layers.insert(dummy_id.clone(), src_layer + i + 1);
            new_ag.add_edge(&chain_prev, &dummy_id, None);
            dummy_ids.push(dummy_id.clone());
            chain_prev = dummy_id;
        }
        new_ag.add_edge(&chain_prev, tgt_id, None);

        dummy_edges.push(DummyEdge {
            original_src: src_id.clone(),
            original_tgt: tgt_id.clone(),
            dummy_ids,
        });
    }

    let layer_count = layers.values().copied().max().map_or(1, |m| m + 1);
    AugmentedGraph {
        ag: new_ag,
        layers,
        layer_count,
        dummy_edges,
    }
}

// ─── Crossing Minimization ───────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Sweep {
    /// Order a layer by its predecessors in the layer above.
    Down,
    /// Order a layer by its successors in the layer below.
    Up,
}

fn barycenter(node_id: &str, ag: &AdjGraph, neighbor_pos: &HashMap<&str, f64>, sweep: Sweep) -> f64 {
    let neighbors = match sweep {
        Sweep::Down => ag.predecessors_of(node_id),
        Sweep::Up => ag.successors_of(node_id),
    };
    let positions: Vec<f64> = neighbors
        .iter()
        .filter_map(|nb| neighbor_pos.get(nb.as_str()).copied())
        .collect();
    if positions.is_empty() {
        f64::INFINITY
    } else {
        positions.iter().sum::<f64>() / positions.len() as f64
    }
}

fn count_crossings(ordering: &[Vec<String>], ag: &AdjGraph) -> usize {
    let mut total = 0usize;
    for l_idx in 0..ordering.len().saturating_sub(1) {
        let tgt_pos: HashMap<&str, usize> = ordering[l_idx + 1]
            .iter()
            .enumerate()
            .map(|(i, nid)| (nid.as_str(), i))
            .collect();
        let mut edges: Vec<(usize, usize)> = Vec::new();
        for (sp, src_id) in ordering[l_idx].iter().enumerate() {
            for nb in ag.successors_of(src_id) {
                if let Some(&tp) = tgt_pos.get(nb.as_str()) {
                    edges.push((sp, tp));
                }
            }
        }
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                let (ei0, ei1) = edges[i];
                let (ej0, ej1) = edges[j];
                if (ei0 < ej0 && ei1 > ej1) || (ei0 > ej0 && ei1 < ej1) {
                    total += 1;
                }
            }
        }
    }
    total
}

fn sort_layer(layer: &mut [String], ag: &AdjGraph, reference: &[String], sweep: Sweep) {
    let pos: HashMap<&str, f64> = reference
        .iter()
        .enumerate()
        .map(|(i, nid)| (nid.as_str(), i as f64))
        .collect();
    let keyed: HashMap<String, f64> = layer
        .iter()
        .map(|n| (n.clone(), barycenter(n, ag, &pos, sweep)))
        .collect();
    // stable sort keeps the previous order for equal barycenters
    layer.sort_by(|a, b| keyed[a].total_cmp(&keyed[b]));
}

fn minimise_crossings(aug: &AugmentedGraph) -> Vec<Vec<String>> {
    let layer_count = aug.layer_count;
    let mut ordering: Vec<Vec<String>> = vec![Vec::new(); layer_count];

    let mut sorted_nodes: Vec<&str> = aug.ag.nodes.iter().map(|s| s.as_str()).collect();
    sorted_nodes.sort();
    for node_id in sorted_nodes {
        let layer = aug.layers.get(node_id).copied().unwrap_or(0);
        if layer < ordering.len() {
            ordering[layer].push(node_id.to_string());
        }
    }

    let mut best = count_crossings(&ordering, &aug.ag);
    let mut best_ordering = ordering.clone();

    for _pass in 0..MAX_PASSES {
        if best == 0 {
            break;
        }
        for layer_idx in 1..layer_count {
            let (above, rest) = ordering.split_at_mut(layer_idx);
            sort_layer(&mut rest[0], &aug.ag, &above[layer_idx - 1], Sweep::Down);
        }
        for layer_idx in (0..layer_count.saturating_sub(1)).rev() {
            let (upto, below) = ordering.split_at_mut(layer_idx + 1);
            sort_layer(&mut upto[layer_idx], &aug.ag, &below[0], Sweep::Up);
        }

        let crossings = count_crossings(&ordering, &aug.ag);
        if crossings >= best {
            break;
        }
        best = crossings;
        best_ordering = ordering.clone();
    }

    tracing::trace!(crossings = best, "crossing minimisation done");
    best_ordering
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

/// A node (real or dummy) with pixel geometry.
#[derive(Debug, Clone)]
struct PlacedNode {
    id: String,
    layer: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PlacedNode {
    fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

fn assign_coordinates(
    ordering: &[Vec<String>],
    aug: &AugmentedGraph,
    options: &LayoutOptions,
) -> Vec<PlacedNode> {
    let h_gap = options.sibling_gap;
    let node_width = |id: &str| {
        if id.starts_with(DUMMY_PREFIX) {
            DUMMY_WIDTH
        } else {
            options.node_width
        }
    };

    let layer_total_widths: Vec<f64> = ordering
        .iter()
        .map(|layer_nodes| {
            let w_sum: f64 = layer_nodes.iter().map(|nid| node_width(nid)).sum();
            let gaps = layer_nodes.len().saturating_sub(1) as f64 * h_gap;
            w_sum + gaps
        })
        .collect();
    let max_layer_w = layer_total_widths.iter().copied().fold(0.0, f64::max);
    let center_col = max_layer_w / 2.0;

    let mut nodes: Vec<PlacedNode> = Vec::new();
    for (layer_idx, layer_nodes) in ordering.iter().enumerate() {
        let y = layer_idx as f64 * (options.node_height + options.layer_gap);
        let mut x = (center_col - layer_total_widths[layer_idx] / 2.0).max(0.0);
        for node_id in layer_nodes {
            let width = node_width(node_id);
            nodes.push(PlacedNode {
                id: node_id.clone(),
                layer: layer_idx,
                x,
                y,
                width,
                height: options.node_height,
            });
            x += width + h_gap;
        }
    }

    let node_idx: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    // Barycenter refinement, forward pass (child layer aligns to parents)
    for layer_idx in 1..ordering.len() {
        let mut sum_child = 0.0;
        let mut sum_parent = 0.0;
        let mut count = 0usize;
        for node_id in &ordering[layer_idx] {
            let ni = node_idx[node_id];
            for src in aug.ag.predecessors_of(node_id) {
                if src.starts_with(DUMMY_PREFIX) {
                    continue;
                }
                if let Some(&pi) = node_idx.get(src) {
                    if nodes[pi].layer + 1 == layer_idx {
                        sum_child += nodes[ni].center_x();
                        sum_parent += nodes[pi].center_x();
                        count += 1;
                    }
                }
            }
        }
        shift_layer(&mut nodes, &node_idx, &ordering[layer_idx], sum_parent, sum_child, count, h_gap);
    }

    // Backward pass (parent layer aligns to children)
    for layer_idx in (0..ordering.len().saturating_sub(1)).rev() {
        let mut sum_node = 0.0;
        let mut sum_child = 0.0;
        let mut count = 0usize;
        for node_id in &ordering[layer_idx] {
            let ni = node_idx[node_id];
            for tgt in aug.ag.successors_of(node_id) {
                if tgt.starts_with(DUMMY_PREFIX) {
                    continue;
                }
                if let Some(&ci) = node_idx.get(tgt) {
                    if nodes[ci].layer == layer_idx + 1 {
                        sum_node += nodes[ni].center_x();
                        sum_child += nodes[ci].center_x();
                        count += 1;
                    }
                }
            }
        }
        shift_layer(&mut nodes, &node_idx, &ordering[layer_idx], sum_child, sum_node, count, h_gap);
    }

    let min_x = nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
    if min_x.is_finite() && min_x > 0.0 {
        for n in &mut nodes {
            n.x -= min_x;
        }
    }

    nodes
}

/// Move a whole layer by the mean offset between `toward` and `from`
/// centers, unless that offset exceeds one gap.
fn shift_layer(
    nodes: &mut [PlacedNode],
    node_idx: &HashMap<String, usize>,
    layer: &[String],
    toward: f64,
    from: f64,
    count: usize,
    max_shift: f64,
) {
    if count == 0 {
        return;
    }
    let shift = (toward - from) / count as f64;
    if shift.abs() > max_shift {
        return;
    }
    for node_id in layer {
        let ni = node_idx[node_id];
        nodes[ni].x = (nodes[ni].x + shift).max(0.0);
    }
}

// ─── Edge Routing ────────────────────────────────────────────────────────────

fn compute_orthogonal_waypoints(
    from_node: &PlacedNode,
    to_node: &PlacedNode,
    layer_top_y: &[f64],
    layer_bottom_y: &[f64],
    dummy_xs: &[f64],
) -> Vec<Point> {
    let exit_x = from_node.center_x();
    let exit_y = from_node.y + from_node.height;
    let entry_x = to_node.center_x();
    let entry_y = to_node.y;

    let low_layer = from_node.layer.min(to_node.layer);
    let high_layer = from_node.layer.max(to_node.layer);

    let mut waypoints = vec![Point::new(exit_x, exit_y)];
    let mut last = Point::new(exit_x, exit_y);

    for gap_idx in 0..high_layer - low_layer {
        let gap = low_layer + gap_idx;
        let gap_start = layer_bottom_y.get(gap).copied().unwrap_or(exit_y);
        let gap_end = layer_top_y.get(gap + 1).copied().unwrap_or(entry_y);
        let mid_y = gap_start + (gap_end - gap_start).max(0.0) / 2.0;

        let gap_x = match dummy_xs.get(gap_idx) {
            Some(&x) => x,
            None if gap_idx == 0 => exit_x,
            None => entry_x,
        };

        if last.x != gap_x {
            waypoints.push(Point::new(gap_x, last.y));
        }
        last = Point::new(gap_x, mid_y);
        waypoints.push(last);
    }

    if last.x != entry_x {
        waypoints.push(Point::new(entry_x, last.y));
    }
    waypoints.push(Point::new(entry_x, entry_y));
    waypoints
}

fn route_edges(
    lg: &LayoutGraph,
    placed: &[PlacedNode],
    aug: &AugmentedGraph,
    reversed_edges: &HashSet<(String, String)>,
) -> HashMap<EdgeId, Vec<Point>> {
    let node_map: HashMap<&str, &PlacedNode> = placed.iter().map(|n| (n.id.as_str(), n)).collect();

    let layer_count = aug.layer_count.max(1);
    let mut layer_top_y = vec![f64::INFINITY; layer_count];
    let mut layer_bottom_y = vec![0.0f64; layer_count];
    for n in placed {
        layer_top_y[n.layer] = layer_top_y[n.layer].min(n.y);
        layer_bottom_y[n.layer] = layer_bottom_y[n.layer].max(n.y + n.height);
    }

    let mut dummy_xs_map: HashMap<(&str, &str), Vec<f64>> = HashMap::new();
    for de in &aug.dummy_edges {
        let xs: Vec<f64> = de
            .dummy_ids
            .iter()
            .filter_map(|did| node_map.get(did.as_str()))
            .map(|n| n.center_x())
            .collect();
        dummy_xs_map.insert((de.original_src.as_str(), de.original_tgt.as_str()), xs);
    }

    let mut routes: HashMap<EdgeId, Vec<Point>> = HashMap::new();
    for (edge_id, src, tgt) in lg.edges() {
        if src == tgt {
            continue;
        }
        let is_reversed = reversed_edges.contains(&(src.to_string(), tgt.to_string()));
        let (vis_from, vis_to) = if is_reversed { (tgt, src) } else { (src, tgt) };

        let (Some(from_node), Some(to_node)) = (node_map.get(vis_from), node_map.get(vis_to))
        else {
            continue;
        };
        let dummy_xs = dummy_xs_map
            .get(&(vis_from, vis_to))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let mut waypoints =
            compute_orthogonal_waypoints(from_node, to_node, &layer_top_y, &layer_bottom_y, dummy_xs);
        if is_reversed {
            waypoints.reverse();
        }
        routes.insert(edge_id.clone(), waypoints);
    }

    routes
}

// ─── SugiyamaLayout Engine ───────────────────────────────────────────────────

/// Sugiyama layered layout engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SugiyamaLayout;

impl LayoutEngine for SugiyamaLayout {
    fn place(&self, lg: &LayoutGraph, options: &LayoutOptions) -> Result<Placement, LayoutError> {
        let ag = AdjGraph::from_layout_graph(lg);
        let (dag, reversed_edges) = remove_cycles(&ag);
        let la = LayerAssignment::assign(&dag);
        let aug = insert_dummy_nodes(&dag, &la);
        let ordering = minimise_crossings(&aug);
        let placed = assign_coordinates(&ordering, &aug, options);
        let routes = route_edges(lg, &placed, &aug, &reversed_edges);

        tracing::debug!(
            nodes = lg.node_count(),
            edges = lg.edge_count(),
            layers = la.layer_count,
            reversed = reversed_edges.len(),
            dummies = aug.ag.nodes.len() - dag.nodes.len(),
            "sugiyama layout placed"
        );

        let positions = placed
            .into_iter()
            .filter(|n| !n.id.starts_with(DUMMY_PREFIX))
            .map(|n| {
                let placement = NodePlacement {
                    position: Point::new(n.x, n.y),
                    layer: n.layer,
                };
                (n.id, placement)
            })
            .collect();

        Ok(Placement { positions, routes })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
