//! Course catalog and the lookup seams the graph core consumes.
//!
//! `CourseLookup` is the synchronous collaborator used by the full DFS and
//! by the single-step expansion; `AsyncCourseLookup` lets the expansion fan
//! its fetches out concurrently. `Catalog` implements both over an
//! in-memory array of records loaded from the catalog JSON file.

pub mod types;

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

pub use types::{ADMISSION_COURSE, COURSE_CODE_LEN, Course, CourseInfo, is_admission, subject_of};

use crate::error::{CatalogError, ConfigError, Result};

// ─── Lookup traits ───────────────────────────────────────────────────────────

/// Resolves course codes to catalog records.
///
/// Unknown codes resolve to `None`; implementations must not panic on them.
pub trait CourseLookup {
    fn get_by_id(&self, id: &str) -> Option<Course>;

    /// Every record, in catalog order. Only the map-page generator uses this.
    fn get_all(&self) -> Vec<Course>;

    /// Display metadata for one course.
    fn get_info(&self, id: &str) -> Option<CourseInfo> {
        self.get_by_id(id).map(|c| c.info())
    }

    /// Courses whose subject prefix is in `subjects`, in catalog order.
    /// An empty filter selects every course.
    fn courses_in_subjects(&self, subjects: &[&str]) -> Vec<Course> {
        self.get_all()
            .into_iter()
            .filter(|c| subjects.is_empty() || subjects.contains(&c.subject()))
            .collect()
    }
}

/// Asynchronous variant of [`CourseLookup`] for remote or lazily-loaded data.
pub trait AsyncCourseLookup {
    fn fetch_course(&self, id: &str) -> impl Future<Output = Option<Course>>;

    fn fetch_info(&self, id: &str) -> impl Future<Output = Option<CourseInfo>> {
        let course = self.fetch_course(id);
        async move { course.await.map(|c| c.info()) }
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// In-memory catalog, indexed by course code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate codes and codes that would make
    /// edge identifiers ambiguous.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            validate_course_code(&course.course_no)?;
            if index.insert(course.course_no.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCourse(course.course_no.clone()));
            }
        }
        Ok(Self { courses, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::from_courses(courses)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

}

impl CourseLookup for Catalog {
    fn get_by_id(&self, id: &str) -> Option<Course> {
        self.get(id).cloned()
    }

    fn get_all(&self) -> Vec<Course> {
        self.courses.clone()
    }
}

impl AsyncCourseLookup for Catalog {
    fn fetch_course(&self, id: &str) -> impl Future<Output = Option<Course>> {
        std::future::ready(self.get_by_id(id))
    }
}

fn validate_course_code(code: &str) -> Result<()> {
    if code.is_empty() || code.contains('-') {
        return Err(CatalogError::InvalidCourseCode(code.to_string()));
    }
    Ok(())
}

// ─── Subject groups ──────────────────────────────────────────────────────────

/// Named map pages and the subject prefixes each one covers.
///
/// `all` maps to the empty list, which [`CourseLookup::courses_in_subjects`]
/// reads as "every subject".
pub const SUBJECT_GROUPS: &[(&str, &[&str])] = &[
    ("all", &[]),
    ("art", &["ART"]),
    ("music", &["MUS"]),
    ("theater", &["THR"]),
    ("history", &["HIS"]),
    ("classics", &["LAT", "GRK"]),
    ("english", &["ENG"]),
    ("religion", &["REL"]),
    ("arabic", &["ARA"]),
    ("chinese", &["CHI"]),
    ("french", &["FRE"]),
    ("german", &["GER"]),
    ("italian", &["ITA"]),
    ("japanese", &["JPN"]),
    ("russian", &["RUS"]),
    ("spanish", &["SPA"]),
    ("stemwithoutcs", &["CHE", "BIO", "PHY", "MAT"]),
    ("cs", &["CSC"]),
];

pub fn subject_group(name: &str) -> std::result::Result<&'static [&'static str], ConfigError> {
    let lower = name.to_lowercase();
    SUBJECT_GROUPS
        .iter()
        .find(|(group, _)| *group == lower)
        .map(|(_, subjects)| *subjects)
        .ok_or_else(|| ConfigError::UnknownSubjectGroup(name.to_string()))
}

#[cfg(test)]
#[path = "../../tests/rust/test_catalog.rs"]
mod tests;
