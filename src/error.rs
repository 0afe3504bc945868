//! Error types for hard faults.
//!
//! Bad catalog *data* (unknown course codes, malformed requirement strings,
//! a root that does not resolve) is never an error: the pipeline degrades
//! instead. What lands here are faults the caller must handle, such as an
//! unreadable catalog file or an unknown option name.

use std::path::PathBuf;

/// Result type alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading or validating a course catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON array of course records.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same course code.
    #[error("duplicate course code '{0}' in catalog")]
    DuplicateCourse(String),

    /// A course code is empty or contains an edge-id delimiter.
    #[error("invalid course code '{0}': codes must be non-empty and must not contain '-'")]
    InvalidCourseCode(String),
}

/// Errors raised when interpreting user-supplied option names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown edge direction '{0}'; use 'required-to-dependent' (up) or 'dependent-to-required' (down)")]
    UnknownDirection(String),

    #[error("unknown subject group '{0}'")]
    UnknownSubjectGroup(String),
}

/// Raised by a [`crate::layout::LayoutEngine`] that cannot place a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine failed: {0}")]
    Engine(String),
}
