use super::*;
use crate::catalog::Catalog;
use crate::graph::Exploration;

const FIXTURE: &str = include_str!("../fixtures/courses.json");

fn details() -> CourseDetails {
    let catalog = Catalog::from_json_str(FIXTURE).unwrap();
    Exploration::start("MAT320", &catalog).details
}

// ── Hover / unhover ───────────────────────────────────────────────────────

#[test]
fn test_hover_sets_highlight_and_popup() {
    let state = InteractionState::new().on_node_hover("MAT310", &details());
    assert_eq!(state.highlight(), Some("MAT310"));
    assert!(state.popup.active);
    assert!(!state.popup.locked);
    assert_eq!(state.popup.course_no, "MAT310");
    assert_eq!(state.popup.long_title, "Precalculus");
    assert_eq!(
        state.popup.prerequisite_line().as_deref(),
        Some("Prerequisite(s): MAT210 or MAT220")
    );
}

#[test]
fn test_hover_unknown_course_shows_bare_popup() {
    let state = InteractionState::new().on_node_hover("ZZZ999", &details());
    assert_eq!(state.highlight(), Some("ZZZ999"));
    assert_eq!(state.popup.course_no, "ZZZ999");
    assert_eq!(state.popup.long_title, "");
    assert!(state.popup.prerequisite_line().is_none());
}

#[test]
fn test_unhover_clears() {
    let state = InteractionState::new()
        .on_node_hover("MAT320", &details())
        .on_node_unhover();
    assert_eq!(state, InteractionState::default());
}

#[test]
fn test_transitions_do_not_mutate_input() {
    let hovered = InteractionState::new().on_node_hover("MAT320", &details());
    let snapshot = hovered.clone();
    let _ = hovered.on_node_right_click("MAT320");
    let _ = hovered.on_node_unhover();
    assert_eq!(hovered, snapshot);
}

// ── Lock ──────────────────────────────────────────────────────────────────

#[test]
fn test_locked_popup_ignores_hover_but_highlight_moves() {
    let d = details();
    let locked = InteractionState::new()
        .on_node_hover("MAT320", &d)
        .on_node_right_click("MAT320");
    assert!(locked.popup.locked);

    let moved = locked.on_node_hover("MAT310", &d);
    assert_eq!(moved.highlight(), Some("MAT310"));
    assert_eq!(moved.popup.course_no, "MAT320");
    assert!(moved.popup.locked);

    let left = moved.on_node_unhover();
    assert_eq!(left.highlight(), None);
    assert_eq!(left.popup.course_no, "MAT320");
    assert!(left.popup.active);
}

#[test]
fn test_right_click_toggles() {
    let state = InteractionState::new().on_node_hover("MAT320", &details());
    let twice = state.on_node_right_click("MAT320").on_node_right_click("MAT320");
    assert_eq!(twice, state);
}

#[test]
fn test_right_click_on_other_node_locks_current_popup() {
    let d = details();
    let locked = InteractionState::new()
        .on_node_hover("MAT320", &d)
        .on_node_right_click("MAT310");
    assert!(locked.popup.locked);
    assert_eq!(locked.popup.course_no, "MAT320");
}

#[test]
fn test_pane_click_clears_and_unlocks() {
    let state = InteractionState::new()
        .on_node_hover("MAT320", &details())
        .on_node_right_click("MAT320")
        .on_pane_click();
    assert_eq!(state.popup, PopupParams::empty());
    assert!(!state.popup.locked);
}

// ── Popup text ────────────────────────────────────────────────────────────

#[test]
fn test_prerequisite_line_hidden_for_admission() {
    let popup = PopupParams {
        course_no: "PEA000".to_string(),
        prerequisites_full: "None".to_string(),
        ..PopupParams::default()
    };
    assert!(popup.prerequisite_line().is_none());
}

// ── Click routing ─────────────────────────────────────────────────────────

#[test]
fn test_click_course_navigates() {
    assert_eq!(
        on_node_click("PHY530", false),
        ClickAction::Navigate("/course/PHY530".to_string())
    );
    assert_eq!(
        on_node_click("PHY530", true),
        ClickAction::OpenInNewTab("/course/PHY530".to_string())
    );
}

#[test]
fn test_click_edge_ignored() {
    assert_eq!(on_node_click("pe-PHY530-PHY430", false), ClickAction::Ignore);
    assert_eq!(on_node_click("ce-PHY430-MAT310", true), ClickAction::Ignore);
}

#[test]
fn test_click_action_serializes() {
    let json = serde_json::to_value(on_node_click("MAT110", false)).unwrap();
    assert_eq!(json["action"], "navigate");
    assert_eq!(json["path"], "/course/MAT110");
}
