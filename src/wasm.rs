//! WASM bindings for course-map.
//!
//! Each call takes the catalog as a JSON string and returns the page
//! (graph state plus render model) as a JSON string.

use wasm_bindgen::prelude::*;

use crate::{Catalog, EdgeDirection, LayoutOptions, course_page, map_page};

fn load(catalog_json: &str) -> Result<Catalog, JsError> {
    Catalog::from_json_str(catalog_json).map_err(|e| JsError::new(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Apply a direction name, keeping the preset's direction when empty.
fn with_direction(options: LayoutOptions, direction: &str) -> Result<LayoutOptions, JsError> {
    match non_empty(direction) {
        None => Ok(options),
        Some(d) => d
            .parse::<EdgeDirection>()
            .map(|d| options.with_direction(d))
            .map_err(|e| JsError::new(&e.to_string())),
    }
}

/// Course page after `depth` expansions.
///
/// - `direction`: "up", "down", or empty string for the course-page default
/// - `highlight`: course to highlight, or empty string for none
#[wasm_bindgen(js_name = "coursePage")]
pub fn course_page_json(
    catalog_json: &str,
    course: &str,
    depth: usize,
    direction: &str,
    hide_admission: bool,
    highlight: &str,
) -> Result<String, JsError> {
    let catalog = load(catalog_json)?;
    let options = with_direction(LayoutOptions::course_page(), direction)?
        .with_hide_admission(hide_admission);
    let page = course_page(course, &catalog, depth, &options, non_empty(highlight));
    to_json(&page)
}

/// Map page for a subject group.
///
/// - `direction`: "up", "down", or empty string for the map default
#[wasm_bindgen(js_name = "mapPage")]
pub fn map_page_json(
    catalog_json: &str,
    group: &str,
    direction: &str,
    highlight: &str,
) -> Result<String, JsError> {
    let catalog = load(catalog_json)?;
    let options = with_direction(LayoutOptions::map_page(), direction)?;
    let page = map_page(&catalog, group, &options, non_empty(highlight))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_json(&page)
}

#[cfg(test)]
#[path = "../tests/rust/test_wasm.rs"]
mod tests;
