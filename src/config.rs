//! Configuration for the layout and render pipeline.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// Which way layout edges point.
///
/// The course page and the map pages have historically used opposite
/// conventions, so this is chosen per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeDirection {
    /// Edge runs from the required course to the course that requires it.
    #[default]
    RequiredToDependent,
    /// Edge runs from the dependent course to what it requires.
    DependentToRequired,
}

impl EdgeDirection {
    /// Orient a (base, required) pair as (source, target).
    pub fn orient<'a>(self, base: &'a str, required: &'a str) -> (&'a str, &'a str) {
        match self {
            EdgeDirection::RequiredToDependent => (required, base),
            EdgeDirection::DependentToRequired => (base, required),
        }
    }
}

impl FromStr for EdgeDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "required-to-dependent" | "up" => Ok(EdgeDirection::RequiredToDependent),
            "dependent-to-required" | "down" => Ok(EdgeDirection::DependentToRequired),
            _ => Err(ConfigError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDirection::RequiredToDependent => write!(f, "required-to-dependent"),
            EdgeDirection::DependentToRequired => write!(f, "dependent-to-required"),
        }
    }
}

/// Options for one `layout()` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOptions {
    pub direction: EdgeDirection,
    /// Drop the admission sentinel and its edges from the layout graph.
    pub hide_admission: bool,
    pub node_width: f64,
    pub node_height: f64,
    /// Vertical space between layers.
    pub layer_gap: f64,
    /// Horizontal space between neighbours in a layer.
    pub sibling_gap: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::course_page()
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-course page: requirements flow into the course, admission shown.
    pub fn course_page() -> Self {
        Self {
            direction: EdgeDirection::RequiredToDependent,
            hide_admission: false,
            node_width: 130.0,
            node_height: 70.0,
            layer_gap: 60.0,
            sibling_gap: 40.0,
        }
    }

    /// Subject map page: dependents first, admission hidden.
    pub fn map_page() -> Self {
        Self {
            direction: EdgeDirection::DependentToRequired,
            hide_admission: true,
            node_width: 120.0,
            node_height: 60.0,
            layer_gap: 60.0,
            sibling_gap: 30.0,
        }
    }

    pub fn for_page(course_page: bool) -> Self {
        if course_page {
            Self::course_page()
        } else {
            Self::map_page()
        }
    }

    pub fn with_direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_hide_admission(mut self, hide: bool) -> Self {
        self.hide_admission = hide;
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
