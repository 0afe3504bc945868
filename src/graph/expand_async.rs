//! Concurrent frontier expansion over an [`AsyncCourseLookup`].
//!
//! Fetches for one level are issued together and awaited as a batch: the
//! frontier courses, then every token they reference, then the metadata of
//! each discovery. Results are merged by course id in key order, so the
//! outcome matches [`super::expand_frontier`] regardless of completion
//! order. Callers run one expansion at a time; nothing is shared between
//! concurrent calls.

use std::collections::{BTreeSet, HashMap};

use futures_util::future::join_all;

use super::builder::Exploration;
use super::types::Requirements;
use crate::catalog::{AsyncCourseLookup, Course, is_admission};
use crate::parsers::{RequirementTokens, parse_requirements};

pub async fn expand_frontier_async<L: AsyncCourseLookup>(
    state: &Exploration,
    lookup: &L,
) -> Exploration {
    let frontier: Vec<String> = state
        .frontier()
        .into_iter()
        .filter(|id| !is_admission(id))
        .collect();

    let courses = join_all(frontier.iter().map(|id| lookup.fetch_course(id))).await;
    let parsed: HashMap<&str, RequirementTokens> = frontier
        .iter()
        .zip(courses)
        .filter_map(|(id, course)| {
            course.map(|c| (id.as_str(), parse_requirements(c.requirements.as_deref())))
        })
        .collect();

    let wanted: BTreeSet<&str> = parsed
        .values()
        .flat_map(|tokens| tokens.iter().map(String::as_str))
        .collect();
    let found = join_all(wanted.iter().map(|id| lookup.fetch_course(id))).await;
    let resolved: HashMap<&str, Course> = wanted
        .iter()
        .zip(found)
        .filter_map(|(id, course)| course.map(|c| (*id, c)))
        .collect();

    // Sentinel keys are marked expanded without a fetch.
    let fetched: Vec<(String, Option<Requirements>)> = state
        .frontier()
        .into_iter()
        .map(|id| {
            let requirements = parsed.get(id.as_str()).map(|tokens| {
                Requirements::resolve(tokens, |token| resolved.get(token).cloned())
            });
            (id, requirements)
        })
        .collect();

    let (mut next, discovered) = state.merge_expansion(fetched);
    let infos = join_all(discovered.iter().map(|id| lookup.fetch_info(id))).await;
    next.details.extend(infos.into_iter().flatten());
    tracing::debug!(
        frontier = frontier.len(),
        discovered = discovered.len(),
        "expanded requirement frontier concurrently"
    );
    next
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_expand_async.rs"]
mod tests;
