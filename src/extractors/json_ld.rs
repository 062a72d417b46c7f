//! Structured-data (JSON-LD) recipe location.
//!
//! Recipe blogs usually embed a schema.org `Recipe` node somewhere inside
//! their `ld+json` script blocks, but the surrounding shape varies wildly:
//! a bare object, a top-level array, an `@graph` wrapper, or arbitrary
//! nesting inside other entities. Rather than probing known shapes, the
//! locator runs a depth-first pre-order search over the parsed value for
//! any node whose `@type` contains "recipe" (case-insensitive).

use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::text::normalize;

/// Every Recipe-typed node embedded in the document, in document order.
/// Each script block is parsed independently; a malformed block is
/// skipped and never aborts the scan.
pub fn structured_recipes(document: &Html) -> Vec<Value> {
    let selector = Selector::parse("script[type='application/ld+json']").unwrap();

    let mut recipes = Vec::new();
    for script in document.select(&selector) {
        // inner_html entity-escapes the script's raw text on the way
        // back out; one decode inverts that before any cleanup
        let raw = decode_html_entities(&script.inner_html()).into_owned();
        let cleaned = sanitize_json(&raw);
        match serde_json::from_str::<Value>(&cleaned) {
            Ok(json) => {
                if let Some(node) = find_recipe_node(&json) {
                    recipes.push(node.clone());
                }
            }
            Err(err) => {
                debug!("Skipping malformed ld+json block: {err}");
            }
        }
    }
    recipes
}

/// Clean up the sloppy JSON some CMSes emit inside ld+json blocks.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    // Skip leading junk before the first object
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // Trailing commas before a closing brace/bracket
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    // CDATA-style HTML comment wrappers
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}

/// Depth-first pre-order search for the first Recipe-typed node.
fn find_recipe_node(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => {
            if is_recipe_node(value) {
                return Some(value);
            }
            map.values().find_map(find_recipe_node)
        }
        Value::Array(items) => items.iter().find_map(find_recipe_node),
        _ => None,
    }
}

fn is_recipe_node(value: &Value) -> bool {
    let Some(type_field) = value.get("@type") else {
        return false;
    };
    match type_field {
        Value::String(t) => t.to_lowercase().contains("recipe"),
        Value::Array(types) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|t| t.to_lowercase().contains("recipe"))),
        _ => false,
    }
}

pub fn recipe_name(node: &Value) -> Option<String> {
    node.get("name")
        .and_then(Value::as_str)
        .map(normalize)
        .filter(|name| !name.is_empty())
}

/// Image URL from the `image` field: head of an array, `url` property of
/// an object, or the scalar itself.
pub fn recipe_image(node: &Value) -> Option<String> {
    let image = node.get("image")?;
    let head = match image {
        Value::Array(items) => items.first()?,
        other => other,
    };
    match head {
        Value::String(url) => Some(url.clone()),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
    .filter(|url| !url.is_empty())
}

/// `recipeIngredient` as a normalized line list (a scalar string counts
/// as a one-element list). Noise screening is the caller's job.
pub fn recipe_ingredients(node: &Value) -> Vec<String> {
    match node.get("recipeIngredient") {
        Some(Value::String(one)) => vec![normalize(one)],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(normalize)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn recipe_instructions(node: &Value) -> Vec<String> {
    node.get("recipeInstructions")
        .map(flatten_instructions)
        .unwrap_or_default()
}

/// Recursive flattening of schema.org `recipeInstructions`: a plain
/// string is one step, a `HowToStep` contributes its `text`, and a
/// `HowToSection` recurses into its `itemListElement` list. Null or
/// unrecognized entries are dropped.
fn flatten_instructions(value: &Value) -> Vec<String> {
    match value {
        Value::String(step) => vec![normalize(step)],
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(step) => vec![normalize(step)],
                Value::Object(obj) => match obj.get("@type").and_then(Value::as_str) {
                    Some("HowToStep") => obj
                        .get("text")
                        .and_then(Value::as_str)
                        .map(|text| vec![normalize(text)])
                        .unwrap_or_default(),
                    Some("HowToSection") => obj
                        .get("itemListElement")
                        .map(flatten_instructions)
                        .unwrap_or_default(),
                    _ => Vec::new(),
                },
                _ => Vec::new(),
            })
            .filter(|step| !step.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
