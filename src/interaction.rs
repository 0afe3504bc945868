//! Widget callbacks: hover, unhover, click, right-click, pane click.
//!
//! Every transition takes the current [`InteractionState`] by reference and
//! returns a new one.

use serde::Serialize;

use crate::catalog::{CourseInfo, is_admission};
use crate::graph::CourseDetails;
use crate::layout::EdgeId;

/// Data for the course info popup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PopupParams {
    pub active: bool,
    pub long_title: String,
    pub course_no: String,
    pub description: String,
    pub eligibility: String,
    pub prerequisites_full: String,
    /// While locked, hovering other nodes leaves the popup alone.
    pub locked: bool,
}

impl PopupParams {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Active, unlocked popup for one course.
    pub fn for_course(info: CourseInfo) -> Self {
        Self {
            active: true,
            long_title: info.long_title,
            course_no: info.course_no,
            description: info.description,
            eligibility: info.eligibility,
            prerequisites_full: info.prerequisites_full,
            locked: false,
        }
    }

    /// `"Prerequisite(s): …"`, or `None` for the admission sentinel and for
    /// courses without prerequisite text.
    pub fn prerequisite_line(&self) -> Option<String> {
        if self.prerequisites_full.is_empty() || is_admission(&self.course_no) {
            None
        } else {
            Some(format!("Prerequisite(s): {}", self.prerequisites_full))
        }
    }
}

/// Focused course plus popup contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InteractionState {
    pub highlight: Option<String>,
    pub popup: PopupParams,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight id to pass to `render()`.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// Pointer entered node `id`: it becomes the highlight, and unless the
    /// popup is locked the popup shows its details.
    pub fn on_node_hover(&self, id: &str, details: &CourseDetails) -> Self {
        let popup = if self.popup.locked {
            self.popup.clone()
        } else {
            let info = details.get(id).unwrap_or_else(|| CourseInfo {
                course_no: id.to_string(),
                ..CourseInfo::default()
            });
            PopupParams::for_course(info)
        };
        Self {
            highlight: Some(id.to_string()),
            popup,
        }
    }

    pub fn on_node_unhover(&self) -> Self {
        let popup = if self.popup.locked {
            self.popup.clone()
        } else {
            PopupParams::empty()
        };
        Self {
            highlight: None,
            popup,
        }
    }

    /// Toggle the popup lock. The lock freezes whichever popup is showing,
    /// so the clicked id does not select anything.
    pub fn on_node_right_click(&self, _id: &str) -> Self {
        let mut next = self.clone();
        next.popup.locked = !self.popup.locked;
        next
    }

    /// Click on empty canvas: clear and unlock the popup.
    pub fn on_pane_click(&self) -> Self {
        Self {
            highlight: self.highlight.clone(),
            popup: PopupParams::empty(),
        }
    }
}

/// What the widget should do after a click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "kebab-case")]
pub enum ClickAction {
    /// The clicked element is an edge.
    Ignore,
    Navigate(String),
    OpenInNewTab(String),
}

pub fn course_path(course_no: &str) -> String {
    format!("/course/{course_no}")
}

/// Route a click on element `id`. `modifier` is a ctrl/meta click.
pub fn on_node_click(id: &str, modifier: bool) -> ClickAction {
    if EdgeId::parse(id).is_some() {
        return ClickAction::Ignore;
    }
    let path = course_path(id);
    if modifier {
        ClickAction::OpenInNewTab(path)
    } else {
        ClickAction::Navigate(path)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_interaction.rs"]
mod tests;
