//! Requirement encoding parser.
//!
//! Grammar (one stride convention for the whole string):
//!
//! ```text
//! encoding := prereqs [ '/' coreqs ]
//! prereqs  := [ token { [ '|' ] token } ]
//! coreqs   := [ token { [ '|' ] token } ]
//! token    := six characters, none of them '|' or '/'
//! ```
//!
//! Separators are single characters, so `MAT110|MAT210` (seven-character
//! stride) and `MAT110MAT210` (six-character stride) read the same way.
//! A fragment shorter than a token is dropped and scanning resumes at the
//! next delimiter. No catalog lookup happens here.

use serde::Serialize;

use super::base::{COREQ_MARKER, Cursor, DISJUNCTION};
use crate::catalog::COURSE_CODE_LEN;

/// Raw course-code tokens of one encoding, in encoding order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RequirementTokens {
    pub prerequisites: Vec<String>,
    pub corequisites: Vec<String>,
}

impl RequirementTokens {
    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty() && self.corequisites.is_empty()
    }

    /// Every token, prerequisites first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.prerequisites.iter().chain(self.corequisites.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Prerequisites,
    Corequisites,
}

/// Parse an encoded requirement string. `None` or blank means no requirements.
pub fn parse_requirements(encoding: Option<&str>) -> RequirementTokens {
    let mut tokens = RequirementTokens::default();
    let Some(src) = encoding.map(str::trim).filter(|s| !s.is_empty()) else {
        return tokens;
    };

    let mut cursor = Cursor::new(src);
    let mut section = Section::Prerequisites;
    while !cursor.eof() {
        if cursor.consume(DISJUNCTION) {
            continue;
        }
        if cursor.consume(COREQ_MARKER) {
            section = Section::Corequisites;
            continue;
        }
        let start = cursor.pos;
        match cursor.take_token(COURSE_CODE_LEN) {
            Some(token) => match section {
                Section::Prerequisites => tokens.prerequisites.push(token),
                Section::Corequisites => tokens.corequisites.push(token),
            },
            None => {
                tracing::trace!(encoding = src, offset = start, "dropped malformed fragment");
            }
        }
    }
    tokens
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_requirement.rs"]
mod tests;
