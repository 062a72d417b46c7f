//! Selector-based extraction.
//!
//! Works off a human-curated selector list ordered from the most specific
//! recipe-plugin markup (WPRM, Penci, itemprop) down to generic class
//! names. The first selector that matches anything wins outright; results
//! are never merged across selectors, so ordering the list is the whole
//! tuning surface.

use log::{debug, warn};
use regex::Regex;
use scraper::{Html, Selector};

use super::{split_on_line_breaks, text_without_chrome};
use crate::config::ScrapeConfig;
use crate::noise::is_navigation_noise;
use crate::text::normalize;

/// Try each selector in priority order. For matched nodes, inner markup
/// containing `<br>` markers is split into one line per fragment;
/// otherwise the node's text is taken as a single line with interactive
/// sub-nodes stripped. Lines matching `strip_label` (a section heading
/// bleeding into the matched cells) are dropped.
///
/// Returns empty when nothing matches, or when the winning candidate is
/// empty or classified as navigation noise, so the orchestrator falls
/// through to the header-anchored scan.
pub fn extract_by_selectors(
    document: &Html,
    selectors: &[String],
    strip_label: Option<&Regex>,
    config: &ScrapeConfig,
) -> Vec<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            warn!("Skipping unparseable selector: {selector_str}");
            continue;
        };
        let elements: Vec<_> = document.select(&selector).collect();
        if elements.is_empty() {
            continue;
        }

        let mut lines = Vec::new();
        for element in elements {
            match split_on_line_breaks(element) {
                Some(fragments) => {
                    for line in fragments {
                        push_line(&mut lines, line, strip_label);
                    }
                }
                None => {
                    let line = normalize(&text_without_chrome(element));
                    push_line(&mut lines, line, strip_label);
                }
            }
        }

        if lines.is_empty()
            || is_navigation_noise(&lines, &config.noise_keywords, config.noise_match_threshold)
        {
            debug!("Selector {selector_str} matched but yielded no usable lines");
            return Vec::new();
        }
        debug!("Extracted {} lines using selector: {selector_str}", lines.len());
        return lines;
    }
    Vec::new()
}

fn push_line(lines: &mut Vec<String>, line: String, strip_label: Option<&Regex>) {
    if line.is_empty() {
        return;
    }
    if strip_label.is_some_and(|label| label.is_match(&line)) {
        return;
    }
    lines.push(line);
}
