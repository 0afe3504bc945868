//! Requirement graph construction: full DFS, one-level expansion (sync and
//! concurrent), and subject map pages.

pub mod builder;
pub mod expand_async;
pub mod map;
pub mod types;

pub use builder::{Exploration, build_full, expand_frontier, resolve_requirements};
pub use expand_async::expand_frontier_async;
pub use map::build_subject_map;
pub use types::{
    CourseDetails, RequirementEdge, RequirementGraph, RequirementKind, Requirements,
};

#[cfg(test)]
#[path = "../../tests/rust/test_graph_types.rs"]
mod tests;
