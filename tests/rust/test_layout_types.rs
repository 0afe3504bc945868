use super::*;

#[test]
fn test_point_new() {
    let p = Point::new(3.0, 7.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 7.5);
    assert_eq!(Point::default(), Point::ORIGIN);
}

#[test]
fn test_layout_node_center() {
    let n = LayoutNode::new("MAT110", Point::new(10.0, 20.0), 130.0, 70.0);
    assert_eq!(n.center(), Point::new(75.0, 55.0));
    assert!(n.layer.is_none());
}

#[test]
fn test_layout_edge_accessors() {
    let e = LayoutEdge {
        id: EdgeId::new(RequirementKind::Corequisite, "PHY430", "MAT310"),
        source: "MAT310".to_string(),
        target: "PHY430".to_string(),
        waypoints: Vec::new(),
    };
    assert_eq!(e.kind(), RequirementKind::Corequisite);
    assert_eq!(e.base(), "PHY430");
    assert_eq!(e.other(), "MAT310");
}

#[test]
fn test_layout_result_lookup_and_extent() {
    let id = EdgeId::new(RequirementKind::Prerequisite, "MAT210", "MAT110");
    let lr = LayoutResult {
        nodes: vec![
            LayoutNode::new("MAT110", Point::new(0.0, 0.0), 130.0, 70.0),
            LayoutNode::new("MAT210", Point::new(50.0, 130.0), 130.0, 70.0),
        ],
        edges: vec![LayoutEdge {
            id: id.clone(),
            source: "MAT110".to_string(),
            target: "MAT210".to_string(),
            waypoints: Vec::new(),
        }],
        options: LayoutOptions::course_page(),
    };
    assert!(lr.node("MAT210").is_some());
    assert!(lr.node("MAT999").is_none());
    assert_eq!(lr.edge(&id).map(|e| e.target.as_str()), Some("MAT210"));
    assert_eq!(lr.extent(), (180.0, 200.0));
}

#[test]
fn test_layout_result_serializes_edge_id_as_string() {
    let lr = LayoutResult {
        nodes: Vec::new(),
        edges: vec![LayoutEdge {
            id: EdgeId::new(RequirementKind::Prerequisite, "MAT210", "MAT110"),
            source: "MAT110".to_string(),
            target: "MAT210".to_string(),
            waypoints: vec![Point::new(1.0, 2.0)],
        }],
        options: LayoutOptions::map_page(),
    };
    let json = serde_json::to_value(&lr).unwrap();
    assert_eq!(json["edges"][0]["id"], "pe-MAT210-MAT110");
    assert_eq!(json["edges"][0]["waypoints"][0]["y"], 2.0);
    assert_eq!(json["options"]["direction"], "dependent-to-required");
}

#[test]
fn test_dummy_prefix() {
    assert_eq!(DUMMY_PREFIX, "__dummy_");
}
