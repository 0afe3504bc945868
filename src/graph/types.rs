//! Requirement graph: course id → (prerequisites, corequisites).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::{Course, CourseInfo};
use crate::parsers::RequirementTokens;

// ─── RequirementKind ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Prerequisite,
    Corequisite,
}

impl RequirementKind {
    /// Prefix used in layout edge ids (`pe-…` / `ce-…`).
    pub fn edge_prefix(self) -> &'static str {
        match self {
            RequirementKind::Prerequisite => "pe",
            RequirementKind::Corequisite => "ce",
        }
    }

    pub fn from_edge_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "pe" => Some(RequirementKind::Prerequisite),
            "ce" => Some(RequirementKind::Corequisite),
            _ => None,
        }
    }
}

// ─── Requirements ─────────────────────────────────────────────────────────────

/// Resolved requirements of one course, in encoding order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Requirements {
    pub prerequisites: Vec<Course>,
    pub corequisites: Vec<Course>,
}

impl Requirements {
    /// Resolve parsed tokens through `resolve`, dropping codes it does not know.
    pub fn resolve<F>(tokens: &RequirementTokens, mut resolve: F) -> Self
    where
        F: FnMut(&str) -> Option<Course>,
    {
        let mut lookup_all = |list: &[String]| -> Vec<Course> {
            list.iter()
                .filter_map(|token| {
                    let course = resolve(token.as_str());
                    if course.is_none() {
                        tracing::debug!(token = token.as_str(), "dropped unresolved requirement");
                    }
                    course
                })
                .collect()
        };
        let prerequisites = lookup_all(&tokens.prerequisites);
        let corequisites = lookup_all(&tokens.corequisites);
        Self {
            prerequisites,
            corequisites,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty() && self.corequisites.is_empty()
    }

    /// Ids of every required course, prerequisites first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.prerequisites
            .iter()
            .chain(self.corequisites.iter())
            .map(|c| c.course_no.as_str())
    }

    pub fn of_kind(&self, kind: RequirementKind) -> &[Course] {
        match kind {
            RequirementKind::Prerequisite => &self.prerequisites,
            RequirementKind::Corequisite => &self.corequisites,
        }
    }
}

// ─── RequirementGraph ─────────────────────────────────────────────────────────

/// One directed requirement edge: `base` requires `other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequirementEdge {
    pub kind: RequirementKind,
    pub base: String,
    pub other: String,
}

/// Directed graph keyed by course id.
///
/// A key with both lists empty is either an unexpanded frontier node or a
/// course with no requirements; [`crate::graph::Exploration`] tells the two
/// apart with its expanded set. Keys iterate in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RequirementGraph {
    entries: BTreeMap<String, Requirements>,
}

impl RequirementGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Requirements> {
        self.entries.get(id)
    }

    /// Set the requirements of `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, requirements: Requirements) {
        self.entries.insert(id.into(), requirements);
    }

    /// Add `id` as a frontier key. Never clobbers an existing entry;
    /// returns true if the key was new.
    pub fn insert_frontier(&mut self, id: &str) -> bool {
        if self.entries.contains_key(id) {
            return false;
        }
        self.entries.insert(id.to_string(), Requirements::default());
        true
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirements)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys plus every edge endpoint, sorted and deduplicated.
    pub fn node_ids(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|(id, reqs)| std::iter::once(id.as_str()).chain(reqs.ids()))
            .collect()
    }

    /// Every edge: all prerequisite edges first, then all corequisite edges,
    /// each group in key order then encoding order.
    pub fn edges(&self) -> Vec<RequirementEdge> {
        let mut edges = Vec::new();
        for kind in [RequirementKind::Prerequisite, RequirementKind::Corequisite] {
            for (base, reqs) in &self.entries {
                for course in reqs.of_kind(kind) {
                    edges.push(RequirementEdge {
                        kind,
                        base: base.clone(),
                        other: course.course_no.clone(),
                    });
                }
            }
        }
        edges
    }
}

// ─── CourseDetails ────────────────────────────────────────────────────────────

/// Parallel display-metadata maps keyed by course id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CourseDetails {
    pub titles: BTreeMap<String, String>,
    pub descriptions: BTreeMap<String, String>,
    pub eligibility: BTreeMap<String, String>,
    pub prerequisites_full: BTreeMap<String, String>,
}

impl CourseDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: CourseInfo) {
        let id = info.course_no;
        self.titles.insert(id.clone(), info.long_title);
        self.descriptions.insert(id.clone(), info.description);
        self.eligibility.insert(id.clone(), info.eligibility);
        self.prerequisites_full.insert(id, info.prerequisites_full);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.titles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<CourseInfo> {
        let field = |map: &BTreeMap<String, String>| map.get(id).cloned().unwrap_or_default();
        self.contains(id).then(|| CourseInfo {
            course_no: id.to_string(),
            long_title: field(&self.titles),
            description: field(&self.descriptions),
            eligibility: field(&self.eligibility),
            prerequisites_full: field(&self.prerequisites_full),
        })
    }
}

impl Extend<CourseInfo> for CourseDetails {
    fn extend<T: IntoIterator<Item = CourseInfo>>(&mut self, iter: T) {
        for info in iter {
            self.insert(info);
        }
    }
}
