use std::collections::HashMap;

use super::*;
use crate::catalog::{Catalog, Course};
use crate::config::LayoutOptions;
use crate::graph::build_full;
use crate::layout::layout;

const FIXTURE: &str = include_str!("../fixtures/courses.json");

fn fixture() -> Catalog {
    Catalog::from_json_str(FIXTURE).unwrap()
}

fn phy530_layout() -> LayoutResult {
    layout(&build_full("PHY530", &fixture()), &LayoutOptions::course_page())
}

fn pair_layout() -> LayoutResult {
    // MAT210 requires MAT110
    let catalog = Catalog::from_courses(vec![
        Course::new("MAT210", Some("MAT110")),
        Course::new("MAT110", None),
    ])
    .unwrap();
    layout(&build_full("MAT210", &catalog), &LayoutOptions::course_page())
}

// ── Highlight pass ────────────────────────────────────────────────────────

#[test]
fn test_highlight_is_direction_sensitive() {
    let lr = pair_layout();

    let on_base = render(&lr, Some("MAT210"));
    assert_eq!(on_base.highlighted_edges().len(), 1);
    assert_eq!(on_base.highlighted_edges()[0].to_string(), "pe-MAT210-MAT110");
    assert_eq!(on_base.highlighted_nodes(), vec!["MAT110", "MAT210"]);

    let on_other = render(&lr, Some("MAT110"));
    assert!(on_other.highlighted_edges().is_empty());
    assert!(!on_other.edge("pe-MAT210-MAT110").unwrap().highlighted);
    assert_eq!(on_other.highlighted_nodes(), vec!["MAT110"]);
}

#[test]
fn test_highlighted_edges_render_last() {
    let model = render(&phy530_layout(), Some("PHY530"));
    let n = model.edges.len();
    let tail: Vec<String> = model.edges[n - 3..].iter().map(|e| e.id.to_string()).collect();
    assert_eq!(
        tail,
        vec!["pe-PHY530-PHY430", "pe-PHY530-PHY440", "ce-PHY530-MAT320"]
    );
    assert!(model.edges[..n - 3].iter().all(|e| !e.highlighted));
    assert!(model.edges[n - 3..].iter().all(|e| e.highlighted));
}

#[test]
fn test_highlight_uses_focus_subject_color() {
    let model = render(&phy530_layout(), Some("PHY530"));
    let phy = subject_color("PHY530");
    let coreq = model.edge("ce-PHY530-MAT320").unwrap();
    assert_eq!(coreq.style.stroke, phy);
    assert_eq!(coreq.style.stroke_width, 4.5);
    assert_eq!(coreq.style.stroke_dasharray, "10, 6");
    // MAT320 keeps its own background but glows in the focus colour
    let mat320 = model.node("MAT320").unwrap();
    assert_eq!(mat320.style.background_color, subject_color("MAT320"));
    assert_eq!(mat320.style.box_shadow, format!("0 0 25px {phy}"));
    assert_eq!(mat320.style.border_color, "white");
}

#[test]
fn test_emphasised_nodes_are_focus_and_direct_requirements() {
    let model = render(&phy530_layout(), Some("PHY530"));
    assert_eq!(
        model.highlighted_nodes(),
        vec!["MAT320", "PHY430", "PHY440", "PHY530"]
    );
    let plain = model.node("PHY400").unwrap();
    assert!(!plain.style.is_emphasised());
    assert_eq!(plain.style.border_color, "");
}

#[test]
fn test_no_highlight_keeps_layout_order() {
    let lr = phy530_layout();
    let model = render(&lr, None);
    let ids: Vec<&EdgeId> = model.edges.iter().map(|e| &e.id).collect();
    let expected: Vec<&EdgeId> = lr.edges.iter().map(|e| &e.id).collect();
    assert_eq!(ids, expected);
    assert!(model.highlighted_nodes().is_empty());
    assert!(model.highlighted_edges().is_empty());
}

#[test]
fn test_empty_highlight_is_none() {
    let lr = phy530_layout();
    assert_eq!(render(&lr, Some("")), render(&lr, None));
}

#[test]
fn test_unknown_highlight_changes_nothing_visible() {
    let lr = phy530_layout();
    let model = render(&lr, Some("ZZZ999"));
    assert!(model.highlighted_edges().is_empty());
    assert!(model.highlighted_nodes().is_empty());
}

#[test]
fn test_plain_edge_styles() {
    let model = render(&phy530_layout(), None);
    let pe = model.edge("pe-PHY430-PHY400").unwrap();
    assert_eq!(pe.style.stroke_width, 1.0);
    assert_eq!(pe.style.stroke, "white");
    let ce = model.edge("ce-PHY430-MAT310").unwrap();
    assert_eq!(ce.kind, RequirementKind::Corequisite);
    assert_eq!(ce.style.stroke_width, 0.5);
}

// ── Node descriptors ──────────────────────────────────────────────────────

#[test]
fn test_nodes_carry_layout_geometry() {
    let lr = phy530_layout();
    let model = render(&lr, None);
    assert_eq!(model.nodes.len(), lr.nodes.len());
    for (rn, ln) in model.nodes.iter().zip(&lr.nodes) {
        assert_eq!(rn.id, ln.id);
        assert_eq!(rn.position, ln.position);
        assert_eq!(rn.width, 130.0);
        assert_eq!(rn.label, rn.id);
    }
    assert_eq!(model.node("PEA000").unwrap().style.background_color, "rgba(0, 0, 0, 0)");
}

struct TitleStyler(HashMap<String, String>);

impl NodeStyler for TitleStyler {
    fn label(&self, course_no: &str) -> String {
        self.0.get(course_no).cloned().unwrap_or_else(|| course_no.to_string())
    }

    fn color(&self, _: &str) -> String {
        "black".to_string()
    }
}

#[test]
fn test_caller_supplied_styler() {
    let styler = TitleStyler(HashMap::from([(
        "MAT210".to_string(),
        "Algebra II".to_string(),
    )]));
    let model = render_with(&styler, &pair_layout(), Some("MAT210"));
    assert_eq!(model.node("MAT210").unwrap().label, "Algebra II");
    assert_eq!(model.node("MAT110").unwrap().label, "MAT110");
    assert_eq!(model.node("MAT110").unwrap().style.background_image, "");
    assert_eq!(model.edge("pe-MAT210-MAT110").unwrap().style.stroke, "black");
}

// ── Scenario ──────────────────────────────────────────────────────────────

#[test]
fn test_two_course_scenario_node_count() {
    let catalog = Catalog::from_courses(vec![
        Course::new("AAA100", Some("BBB100")),
        Course::new("BBB100", Some("PEA000")),
        Course::new("PEA000", None),
    ])
    .unwrap();
    let g = build_full("AAA100", &catalog);
    let hidden = render(&layout(&g, &LayoutOptions::map_page()), None);
    assert_eq!(hidden.nodes.len(), 2);
    let shown = render(&layout(&g, &LayoutOptions::course_page()), None);
    assert_eq!(shown.nodes.len(), 3);
}

#[test]
fn test_render_deterministic() {
    let lr = phy530_layout();
    assert_eq!(render(&lr, Some("PHY430")), render(&lr, Some("PHY430")));
}

#[test]
fn test_model_serializes_for_widget() {
    let model = render(&pair_layout(), Some("MAT210"));
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["edges"][0]["id"], "pe-MAT210-MAT110");
    assert_eq!(json["edges"][0]["kind"], "prerequisite");
    assert_eq!(json["nodes"][0]["style"]["borderColor"], "white");
}
