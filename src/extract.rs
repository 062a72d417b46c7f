//! Extraction orchestration.
//!
//! Each field progresses independently through an ordered strategy chain
//! until one yields a non-empty, non-noise candidate: structured data
//! first, then curated selectors, then the header-anchored scan, then a
//! broad generic-selector pass for the two list fields. A field set by an
//! earlier strategy is never overwritten, and a field no strategy can
//! fill simply stays empty.

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extractors::{header_scan, json_ld, selectors};
use crate::model::Recipe;
use crate::noise::is_navigation_noise;
use crate::text::normalize;

static FIRST_HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static PAGE_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static OG_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:image']").unwrap());

/// Run the extraction engine over already-fetched page HTML.
///
/// Partial extraction is not an error: any subset of the fields may come
/// back empty. The only fatal case is input that yields no document tree
/// at all.
pub fn extract_recipe(
    html: &str,
    source_url: &str,
    config: &ScrapeConfig,
) -> Result<Recipe, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::EmptyDocument);
    }
    let document = Html::parse_document(html);

    let ingredient_label = Regex::new(&config.ingredient_label_pattern)?;
    let method_label = Regex::new(&config.method_label_pattern)?;
    let method_stop = Regex::new(&config.method_stop_pattern)?;

    let mut recipe = Recipe::new(source_url);

    // 1. Structured data. Each embedded recipe node fills whatever is
    //    still empty; later blocks never overwrite earlier finds.
    for node in json_ld::structured_recipes(&document) {
        if recipe.name.is_empty() {
            if let Some(name) = json_ld::recipe_name(&node) {
                recipe.name = name;
            }
        }
        if recipe.image_url.is_empty() {
            if let Some(url) = json_ld::recipe_image(&node) {
                recipe.image_url = url;
            }
        }
        if recipe.ingredients.is_empty() {
            let candidate = json_ld::recipe_ingredients(&node);
            if !candidate.is_empty()
                && !is_navigation_noise(
                    &candidate,
                    &config.noise_keywords,
                    config.noise_match_threshold,
                )
            {
                recipe.ingredients = candidate;
            }
        }
        if recipe.method.is_empty() {
            recipe.method = json_ld::recipe_instructions(&node);
        }
    }

    // 2. Markup fallbacks, per field.
    if recipe.name.is_empty() {
        recipe.name = extract_name(&document, config);
    }
    if recipe.image_url.is_empty() {
        recipe.image_url = extract_image(&document, config);
    }

    if recipe.ingredients.is_empty() {
        recipe.ingredients = selectors::extract_by_selectors(
            &document,
            &config.ingredient_selectors,
            Some(&ingredient_label),
            config,
        );
    }
    if recipe.ingredients.is_empty() {
        recipe.ingredients =
            header_scan::scan_by_header(&document, &ingredient_label, &method_label, config);
    }
    if recipe.ingredients.is_empty() {
        recipe.ingredients = selectors::extract_by_selectors(
            &document,
            &config.ingredient_fallback_selectors,
            None,
            config,
        );
    }

    if recipe.method.is_empty() {
        recipe.method = selectors::extract_by_selectors(
            &document,
            &config.method_selectors,
            Some(&method_label),
            config,
        );
    }
    if recipe.method.is_empty() {
        recipe.method = header_scan::scan_by_header(&document, &method_label, &method_stop, config);
    }
    if recipe.method.is_empty() {
        recipe.method = selectors::extract_by_selectors(
            &document,
            &config.method_fallback_selectors,
            None,
            config,
        );
    }

    recipe.ingredients = dedup_lines(recipe.ingredients);
    recipe.method = dedup_lines(recipe.method);

    debug!(
        "Extracted from {source_url}: name={:?}, {} ingredients, {} steps",
        recipe.name,
        recipe.ingredients.len(),
        recipe.method.len()
    );
    Ok(recipe)
}

/// Name fallback chain: first heading, then the configured article-title
/// selectors, then the page title truncated at its separator.
fn extract_name(document: &Html, config: &ScrapeConfig) -> String {
    if let Some(heading) = document.select(&FIRST_HEADING).next() {
        let name = normalize(&heading.text().collect::<String>());
        if !name.is_empty() {
            return name;
        }
    }
    for selector_str in &config.title_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let name = normalize(&element.text().collect::<String>());
            if !name.is_empty() {
                return name;
            }
        }
    }
    if let Some(title) = document.select(&PAGE_TITLE).next() {
        let text = title.text().collect::<String>();
        return normalize(text.split('|').next().unwrap_or_default());
    }
    String::new()
}

/// Image fallback chain: Open Graph meta image, then the configured
/// recipe-plugin image selectors in order.
fn extract_image(document: &Html, config: &ScrapeConfig) -> String {
    if let Some(meta) = document.select(&OG_IMAGE).next() {
        if let Some(content) = meta.value().attr("content") {
            if !content.trim().is_empty() {
                return content.trim().to_string();
            }
        }
    }
    for selector_str in &config.image_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(img) = document.select(&selector).next() {
            if let Some(src) = img.value().attr("src") {
                if !src.trim().is_empty() {
                    return src.trim().to_string();
                }
            }
        }
    }
    String::new()
}

/// Exact-string dedup preserving first-occurrence order; empty lines
/// are dropped along the way.
fn dedup_lines(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
