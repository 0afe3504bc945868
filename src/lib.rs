//! course-map: prerequisite and corequisite graphs for a course catalog.
//!
//! Pipeline: catalog records → requirement parser → graph builder →
//! layout → render model. The entry points below run the whole pipeline
//! for one page; each stage is also usable on its own.

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod layout;
pub mod parsers;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::Serialize;

pub use crate::catalog::{Catalog, Course, CourseLookup};
pub use crate::config::{EdgeDirection, LayoutOptions};
pub use crate::error::{CatalogError, ConfigError, LayoutError, Result};
pub use crate::graph::{Exploration, RequirementGraph};
pub use crate::layout::{LayoutResult, layout};
pub use crate::render::{RenderModel, render};

/// Everything a page needs: the graph state and its render model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPage {
    #[serde(flatten)]
    pub state: Exploration,
    pub render: RenderModel,
}

impl GraphPage {
    pub fn new(state: Exploration, options: &LayoutOptions, highlight: Option<&str>) -> Self {
        let render = render_graph(&state.graph, options, highlight);
        Self { state, render }
    }
}

/// Lay out and render a requirement graph in one step.
pub fn render_graph(
    graph: &RequirementGraph,
    options: &LayoutOptions,
    highlight: Option<&str>,
) -> RenderModel {
    render(&layout(graph, options), highlight)
}

/// Course page: the root plus `depth` rounds of "More Requirements".
pub fn course_page<L>(
    root: &str,
    lookup: &L,
    depth: usize,
    options: &LayoutOptions,
    highlight: Option<&str>,
) -> GraphPage
where
    L: CourseLookup + ?Sized,
{
    let mut state = Exploration::start(root, lookup);
    for _ in 0..depth {
        if state.is_exhausted() {
            break;
        }
        state = state.get_more_requirements(lookup);
    }
    GraphPage::new(state, options, highlight)
}

/// Course page with the whole requirement tree loaded up front.
pub fn full_course_page<L>(
    root: &str,
    lookup: &L,
    options: &LayoutOptions,
    highlight: Option<&str>,
) -> GraphPage
where
    L: CourseLookup + ?Sized,
{
    GraphPage::new(Exploration::full(root, lookup), options, highlight)
}

/// Map page for a named subject group (see [`catalog::SUBJECT_GROUPS`]).
pub fn map_page<L>(
    lookup: &L,
    group: &str,
    options: &LayoutOptions,
    highlight: Option<&str>,
) -> std::result::Result<GraphPage, ConfigError>
where
    L: CourseLookup + ?Sized,
{
    let subjects = catalog::subject_group(group)?;
    let state = graph::build_subject_map(lookup, subjects);
    Ok(GraphPage::new(state, options, highlight))
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
