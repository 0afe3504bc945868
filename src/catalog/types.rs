//! Catalog records: Course and the display-only CourseInfo subset.
//!
//! Field names on the wire match the school's catalog file
//! (`course_no`, `lt`, `desc`, `eli`, `pre`, `prereq_full`, ...).

use serde::{Deserialize, Serialize};

// ─── Constants ────────────────────────────────────────────────────────────────

/// Synthetic course meaning "admitted to the institution".
///
/// A leaf: it terminates every requirement chain and is never expanded.
pub const ADMISSION_COURSE: &str = "PEA000";

/// Width of one course-code token in a requirement encoding.
pub const COURSE_CODE_LEN: usize = 6;

pub fn is_admission(course_no: &str) -> bool {
    course_no == ADMISSION_COURSE
}

// ─── Course ───────────────────────────────────────────────────────────────────

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub subj: String,
    #[serde(default)]
    pub lvl: String,
    /// Unique code, e.g. `PHY530`.
    pub course_no: String,
    #[serde(rename = "st", default)]
    pub short_title: String,
    #[serde(rename = "lt", default)]
    pub long_title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(rename = "eli", default)]
    pub eligibility: String,
    /// Encoded requirement string; `None` means no requirements.
    #[serde(rename = "pre", default)]
    pub requirements: Option<String>,
    /// Human-readable prerequisite text, for display only.
    #[serde(rename = "prereq_full", default)]
    pub prerequisites_full: String,
}

impl Course {
    pub fn new(course_no: impl Into<String>, requirements: Option<&str>) -> Self {
        Self {
            course_no: course_no.into(),
            requirements: requirements.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Three-letter subject prefix of the course code (`PHY` for `PHY530`).
    pub fn subject(&self) -> &str {
        subject_of(&self.course_no)
    }

    pub fn info(&self) -> CourseInfo {
        CourseInfo::from(self)
    }
}

/// Subject prefix of any course code. Codes shorter than three characters
/// are returned whole.
pub fn subject_of(course_no: &str) -> &str {
    course_no.get(..3).unwrap_or(course_no)
}

// ─── CourseInfo ───────────────────────────────────────────────────────────────

/// Display metadata for popups, fetched without the requirement encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseInfo {
    pub course_no: String,
    pub long_title: String,
    pub description: String,
    pub eligibility: String,
    pub prerequisites_full: String,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        Self {
            course_no: course.course_no.clone(),
            long_title: course.long_title.clone(),
            description: course.description.clone(),
            eligibility: course.eligibility.clone(),
            prerequisites_full: course.prerequisites_full.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_catalog_types.rs"]
mod tests;
