//! Subject map pages: every course of a subject group with its direct
//! requirements, built from the whole catalog.

use super::builder::{Exploration, resolve_requirements};
use crate::catalog::CourseLookup;

/// Build the map for courses whose subject prefix is in `subjects`
/// (every course when `subjects` is empty).
///
/// Selected courses are expanded. Requirements outside the group are kept
/// as frontier keys so they still appear, and can be expanded later.
pub fn build_subject_map<L>(lookup: &L, subjects: &[&str]) -> Exploration
where
    L: CourseLookup + ?Sized,
{
    let mut state = Exploration::default();
    let selected = lookup.courses_in_subjects(subjects);

    for course in &selected {
        let requirements = resolve_requirements(course, lookup);
        state.graph.insert(course.course_no.clone(), requirements);
        state.expanded.insert(course.course_no.clone());
        state.details.insert(course.info());
    }

    let outside: Vec<String> = state
        .graph
        .iter()
        .flat_map(|(_, reqs)| reqs.prerequisites.iter().chain(reqs.corequisites.iter()))
        .map(|c| c.course_no.clone())
        .collect();
    for id in outside {
        if state.graph.insert_frontier(&id) {
            if let Some(info) = lookup.get_info(&id) {
                state.details.insert(info);
            }
        }
    }

    tracing::debug!(
        subjects = ?subjects,
        selected = selected.len(),
        courses = state.graph.len(),
        "built subject map"
    );
    state
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_map.rs"]
mod tests;
