use super::*;
use crate::catalog::Course;
use crate::graph::RequirementGraph;

/// Graph where each `(base, other)` pair means `base` requires `other`.
fn requirement_graph(pairs: &[(&str, &str)]) -> RequirementGraph {
    let mut g = RequirementGraph::new();
    for (base, other) in pairs {
        let mut reqs = g.get(base).cloned().unwrap_or_default();
        reqs.prerequisites.push(Course::new(*other, None));
        g.insert(*base, reqs);
    }
    g
}

fn make_lg(pairs: &[(&str, &str)]) -> LayoutGraph {
    LayoutGraph::from_requirements(&requirement_graph(pairs), &LayoutOptions::course_page())
}

fn place(pairs: &[(&str, &str)]) -> Placement {
    SugiyamaLayout
        .place(&make_lg(pairs), &LayoutOptions::course_page())
        .unwrap()
}

fn is_orthogonal(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
}

// ── Layer Assignment ─────────────────────────────────────────────────────

#[test]
fn test_layer_assignment_chain() {
    let ag = AdjGraph::from_layout_graph(&make_lg(&[("CCC300", "BBB200"), ("BBB200", "AAA100")]));
    let (dag, reversed) = remove_cycles(&ag);
    assert!(reversed.is_empty());
    let la = LayerAssignment::assign(&dag);
    assert_eq!(la.layers["AAA100"], 0);
    assert_eq!(la.layers["BBB200"], 1);
    assert_eq!(la.layers["CCC300"], 2);
    assert_eq!(la.layer_count, 3);
}

#[test]
fn test_layer_assignment_empty_graph() {
    let la = LayerAssignment::assign(&AdjGraph::new());
    assert_eq!(la.layer_count, 1);
}

#[test]
fn test_layer_assignment_fan_in() {
    // both requirements sit above the course that needs them
    let ag = AdjGraph::from_layout_graph(&make_lg(&[("CCC300", "AAA100"), ("CCC300", "BBB200")]));
    let (dag, _) = remove_cycles(&ag);
    let la = LayerAssignment::assign(&dag);
    assert_eq!(la.layers["AAA100"], 0);
    assert_eq!(la.layers["BBB200"], 0);
    assert_eq!(la.layers["CCC300"], 1);
}

// ── Cycle Removal ────────────────────────────────────────────────────────

#[test]
fn test_two_cycle_reverses_one_edge() {
    let ag = AdjGraph::from_layout_graph(&make_lg(&[("HIS510", "HIS520"), ("HIS520", "HIS510")]));
    let (dag, reversed) = remove_cycles(&ag);
    assert_eq!(reversed.len(), 1);
    let la = LayerAssignment::assign(&dag);
    assert_ne!(la.layers["HIS510"], la.layers["HIS520"]);
}

#[test]
fn test_fas_ordering_is_stable() {
    let pairs = [
        ("AAA100", "BBB100"),
        ("BBB100", "CCC100"),
        ("CCC100", "AAA100"),
        ("DDD100", "AAA100"),
    ];
    let first = greedy_fas_ordering(&AdjGraph::from_layout_graph(&make_lg(&pairs)));
    for _ in 0..5 {
        let again = greedy_fas_ordering(&AdjGraph::from_layout_graph(&make_lg(&pairs)));
        assert_eq!(again, first);
    }
}

#[test]
fn test_self_loop_dropped_from_dag() {
    let ag = AdjGraph::from_layout_graph(&make_lg(&[("AAA100", "AAA100")]));
    let (dag, reversed) = remove_cycles(&ag);
    assert!(dag.edges.is_empty());
    assert!(reversed.is_empty());
}

// ── Dummy Nodes ──────────────────────────────────────────────────────────

#[test]
fn test_long_edge_gets_dummy_chain() {
    let ag = AdjGraph::from_layout_graph(&make_lg(&[
        ("DDD400", "AAA100"),
        ("DDD400", "CCC300"),
        ("CCC300", "BBB200"),
        ("BBB200", "AAA100"),
    ]));
    let (dag, _) = remove_cycles(&ag);
    let la = LayerAssignment::assign(&dag);
    let aug = insert_dummy_nodes(&dag, &la);
    assert_eq!(aug.dummy_edges.len(), 1);
    let chain = &aug.dummy_edges[0];
    assert_eq!(chain.original_src, "AAA100");
    assert_eq!(chain.original_tgt, "DDD400");
    assert_eq!(chain.dummy_ids.len(), 2);
    assert_eq!(aug.layers[&chain.dummy_ids[0]], 1);
    assert_eq!(aug.layers[&chain.dummy_ids[1]], 2);
    assert!(chain.dummy_ids.iter().all(|d| d.starts_with(DUMMY_PREFIX)));
}

// ── Crossing Minimisation ────────────────────────────────────────────────

#[test]
fn test_crossing_removed() {
    // sorted initial order puts AAA100,BBB100 over CCC100,DDD100 with one crossing
    let ag = AdjGraph::from_layout_graph(&make_lg(&[("CCC100", "BBB100"), ("DDD100", "AAA100")]));
    let (dag, _) = remove_cycles(&ag);
    let la = LayerAssignment::assign(&dag);
    let aug = insert_dummy_nodes(&dag, &la);
    let initial = vec![
        vec!["AAA100".to_string(), "BBB100".to_string()],
        vec!["CCC100".to_string(), "DDD100".to_string()],
    ];
    assert_eq!(count_crossings(&initial, &aug.ag), 1);
    let ordering = minimise_crossings(&aug);
    assert_eq!(count_crossings(&ordering, &aug.ag), 0);
}

// ── Coordinates ──────────────────────────────────────────────────────────

#[test]
fn test_layers_stack_vertically() {
    let p = place(&[("CCC300", "BBB200"), ("BBB200", "AAA100")]);
    let options = LayoutOptions::course_page();
    let step = options.node_height + options.layer_gap;
    assert_eq!(p.positions["AAA100"].position.y, 0.0);
    assert_eq!(p.positions["BBB200"].position.y, step);
    assert_eq!(p.positions["CCC300"].position.y, 2.0 * step);
    assert_eq!(p.positions["CCC300"].layer, 2);
}

#[test]
fn test_same_layer_nodes_do_not_overlap() {
    let p = place(&[
        ("ZZZ900", "AAA100"),
        ("ZZZ900", "BBB100"),
        ("ZZZ900", "CCC100"),
        ("ZZZ900", "DDD100"),
    ]);
    let width = LayoutOptions::course_page().node_width;
    let mut xs: Vec<f64> = ["AAA100", "BBB100", "CCC100", "DDD100"]
        .iter()
        .map(|id| p.positions[*id].position.x)
        .collect();
    xs.sort_by(f64::total_cmp);
    for w in xs.windows(2) {
        assert!(w[1] - w[0] >= width, "overlap: {w:?}");
    }
    assert!(xs[0] >= 0.0);
}

#[test]
fn test_dummies_not_in_placement() {
    let p = place(&[
        ("DDD400", "AAA100"),
        ("DDD400", "CCC300"),
        ("CCC300", "BBB200"),
        ("BBB200", "AAA100"),
    ]);
    assert_eq!(p.positions.len(), 4);
    assert!(p.positions.keys().all(|k| !k.starts_with(DUMMY_PREFIX)));
}

#[test]
fn test_empty_graph_places_nothing() {
    let p = place(&[]);
    assert!(p.positions.is_empty());
    assert!(p.routes.is_empty());
}

// ── Edge Routing ─────────────────────────────────────────────────────────

#[test]
fn test_route_runs_from_source_bottom_to_target_top() {
    let options = LayoutOptions::course_page();
    let p = place(&[("BBB200", "AAA100")]);
    let id = EdgeId::new(crate::graph::RequirementKind::Prerequisite, "BBB200", "AAA100");
    let route = &p.routes[&id];
    let src = p.positions["AAA100"].position;
    let tgt = p.positions["BBB200"].position;
    assert_eq!(route[0], Point::new(src.x + options.node_width / 2.0, src.y + options.node_height));
    assert_eq!(*route.last().unwrap(), Point::new(tgt.x + options.node_width / 2.0, tgt.y));
    assert!(is_orthogonal(route));
}

#[test]
fn test_long_route_is_orthogonal() {
    let p = place(&[
        ("DDD400", "AAA100"),
        ("DDD400", "CCC300"),
        ("CCC300", "BBB200"),
        ("BBB200", "AAA100"),
    ]);
    assert_eq!(p.routes.len(), 4);
    for route in p.routes.values() {
        assert!(route.len() >= 2);
        assert!(is_orthogonal(route));
    }
}

#[test]
fn test_reversed_route_keeps_edge_direction() {
    let options = LayoutOptions::course_page();
    let p = place(&[("HIS510", "HIS520"), ("HIS520", "HIS510")]);
    assert_eq!(p.routes.len(), 2);
    for (id, route) in &p.routes {
        // source is the required course under the default direction
        let src = p.positions[&id.other].position;
        let tgt = p.positions[&id.base].position;
        assert_eq!(route[0].x, src.x + options.node_width / 2.0);
        assert_eq!(route.last().unwrap().x, tgt.x + options.node_width / 2.0);
    }
}

#[test]
fn test_self_loop_has_no_route() {
    let p = place(&[("AAA100", "AAA100")]);
    assert!(p.positions.contains_key("AAA100"));
    assert!(p.routes.is_empty());
}

// ── Determinism ──────────────────────────────────────────────────────────

#[test]
fn test_layout_is_deterministic() {
    let pairs = [
        ("PHY530", "PHY430"),
        ("PHY530", "PHY440"),
        ("PHY430", "PHY400"),
        ("PHY440", "PHY400"),
        ("PHY530", "MAT320"),
        ("MAT320", "MAT310"),
        ("PHY430", "MAT310"),
        ("HIS510", "HIS520"),
        ("HIS520", "HIS510"),
    ];
    let first = place(&pairs);
    for _ in 0..5 {
        assert_eq!(place(&pairs), first);
    }
}
