//! Requirement string parsing.

pub mod base;
pub mod requirement;

pub use requirement::{RequirementTokens, parse_requirements};
