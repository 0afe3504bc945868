//! Requirement graph construction.
//!
//! Two modes share one resolution step (parse the encoding, resolve each
//! token, drop unknown codes):
//!
//! * [`build_full`] walks depth-first from a root until every reachable
//!   course is a key.
//! * [`expand_frontier`] grows an [`Exploration`] by one level: every key
//!   not yet expanded gets its requirements, and newly discovered courses
//!   become frontier keys for the next call.
//!
//! The admission sentinel is a leaf in both modes and is never looked up
//! once reached as a requirement.

use std::collections::BTreeSet;

use serde::Serialize;

use super::types::{CourseDetails, RequirementGraph, Requirements};
use crate::catalog::{Course, CourseLookup, is_admission};
use crate::parsers::parse_requirements;

/// Parse and resolve the requirements of one course.
pub fn resolve_requirements<L>(course: &Course, lookup: &L) -> Requirements
where
    L: CourseLookup + ?Sized,
{
    let tokens = parse_requirements(course.requirements.as_deref());
    Requirements::resolve(&tokens, |id| lookup.get_by_id(id))
}

// ─── Full expansion ──────────────────────────────────────────────────────────

/// Depth-first build of every requirement reachable from `root`.
///
/// A root that does not resolve yields an empty graph.
pub fn build_full<L>(root: &str, lookup: &L) -> RequirementGraph
where
    L: CourseLookup + ?Sized,
{
    let mut graph = RequirementGraph::new();
    let mut visited: BTreeSet<String> = BTreeSet::new();
    visit(root, lookup, &mut graph, &mut visited);
    tracing::debug!(root, courses = graph.len(), "built full requirement graph");
    graph
}

fn visit<L>(id: &str, lookup: &L, graph: &mut RequirementGraph, visited: &mut BTreeSet<String>)
where
    L: CourseLookup + ?Sized,
{
    visited.insert(id.to_string());
    let Some(course) = lookup.get_by_id(id) else {
        tracing::debug!(course = id, "requirement branch does not resolve");
        return;
    };
    let requirements = resolve_requirements(&course, lookup);
    let next: Vec<String> = requirements.ids().map(str::to_owned).collect();
    graph.insert(id, requirements);
    for child in next {
        if !is_admission(&child) && !visited.contains(&child) {
            visit(&child, lookup, graph, visited);
        }
    }
}

// ─── Incremental expansion ───────────────────────────────────────────────────

/// Requirement graph grown on demand, plus what has been expanded so far
/// and the popup metadata of every key.
///
/// Values are never mutated after they are handed out: every step returns
/// a new `Exploration`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Exploration {
    pub graph: RequirementGraph,
    pub expanded: BTreeSet<String>,
    pub details: CourseDetails,
}

impl Exploration {
    /// Course-page starting state: the root expanded, its direct
    /// requirements present as frontier keys.
    pub fn start<L>(root: &str, lookup: &L) -> Self
    where
        L: CourseLookup + ?Sized,
    {
        let mut state = Self::default();
        let Some(course) = lookup.get_by_id(root) else {
            tracing::debug!(course = root, "root course does not resolve");
            return state;
        };
        let requirements = resolve_requirements(&course, lookup);
        state.details.insert(course.info());
        for required in requirements
            .prerequisites
            .iter()
            .chain(requirements.corequisites.iter())
        {
            state.graph.insert_frontier(&required.course_no);
            state.details.insert(required.info());
        }
        state.graph.insert(root, requirements);
        state.expanded.insert(root.to_string());
        state
    }

    /// Wrap [`build_full`]: every key is expanded and every node, the
    /// sentinel included, has its metadata loaded.
    pub fn full<L>(root: &str, lookup: &L) -> Self
    where
        L: CourseLookup + ?Sized,
    {
        let graph = build_full(root, lookup);
        let expanded = graph.ids().map(str::to_owned).collect();
        let mut details = CourseDetails::new();
        details.extend(graph.node_ids().into_iter().filter_map(|id| lookup.get_info(id)));
        Self {
            graph,
            expanded,
            details,
        }
    }

    /// Keys whose requirements have not been fetched yet, in key order.
    pub fn frontier(&self) -> Vec<String> {
        self.graph
            .ids()
            .filter(|id| !self.expanded.contains(*id))
            .map(str::to_owned)
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.graph.ids().all(|id| self.expanded.contains(id))
    }

    /// The "More Requirements" action: expand one level.
    pub fn get_more_requirements<L>(&self, lookup: &L) -> Self
    where
        L: CourseLookup + ?Sized,
    {
        expand_frontier(self, lookup)
    }

    /// Merge fetched requirements for frontier keys into a new state.
    ///
    /// `None` marks a key as expanded without requirements (the sentinel,
    /// or a course the lookup could not resolve). Returns the new state and
    /// the ids discovered by this merge, in discovery order.
    pub fn merge_expansion(
        &self,
        fetched: Vec<(String, Option<Requirements>)>,
    ) -> (Self, Vec<String>) {
        let mut next = self.clone();
        let mut discovered = Vec::new();
        for (id, requirements) in fetched {
            if !next.expanded.insert(id.clone()) {
                continue;
            }
            let Some(requirements) = requirements else {
                continue;
            };
            for required in requirements.ids() {
                if next.graph.insert_frontier(required) {
                    discovered.push(required.to_string());
                }
            }
            next.graph.insert(id, requirements);
        }
        (next, discovered)
    }
}

/// Expand every unexpanded key of `state` by one level.
///
/// Prerequisite and corequisite keys live in the same map, so one pass
/// over the snapshot of unexpanded keys covers both roles and each key is
/// fetched at most once per call.
pub fn expand_frontier<L>(state: &Exploration, lookup: &L) -> Exploration
where
    L: CourseLookup + ?Sized,
{
    let frontier = state.frontier();
    let fetched: Vec<(String, Option<Requirements>)> = frontier
        .into_iter()
        .map(|id| {
            let requirements = if is_admission(&id) {
                None
            } else {
                lookup
                    .get_by_id(&id)
                    .map(|course| resolve_requirements(&course, lookup))
            };
            (id, requirements)
        })
        .collect();
    let frontier_size = fetched.len();

    let (mut next, discovered) = state.merge_expansion(fetched);
    next.details
        .extend(discovered.iter().filter_map(|id| lookup.get_info(id)));
    tracing::debug!(
        frontier = frontier_size,
        discovered = discovered.len(),
        "expanded requirement frontier"
    );
    next
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_builder.rs"]
mod tests;
