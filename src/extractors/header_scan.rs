//! Header-anchored scanning, the last structured fallback.
//!
//! Many older blogs have no recipe markup at all, just a bold "רכיבים"
//! label followed by a list or a run of paragraphs. The scanner finds a
//! short heading-like element matching the field's label pattern and
//! walks forward through its siblings collecting content, until it hits
//! the next section boundary or runs out of patience.

use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::{fragment_text, LINE_BREAK};
use crate::config::ScrapeConfig;
use crate::noise::is_navigation_noise;
use crate::text::normalize;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, h4, h5, h6, strong, b, p, div").unwrap());
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Collect the lines following the first short heading-like element
/// whose text matches `start`. Only the first anchor that yields any
/// content is used; a candidate classified as navigation noise is
/// discarded and the scan returns empty.
pub fn scan_by_header(
    document: &Html,
    start: &Regex,
    stop: &Regex,
    config: &ScrapeConfig,
) -> Vec<String> {
    for candidate in document.select(&ANCHOR) {
        let label = normalize(&candidate.text().collect::<String>());
        if label.chars().count() >= config.max_header_len || !start.is_match(&label) {
            continue;
        }

        let anchor = promote_label_wrapper(candidate, config);
        let lines = walk_siblings(anchor, start, stop, config);
        if lines.is_empty() {
            continue;
        }
        if is_navigation_noise(&lines, &config.noise_keywords, config.noise_match_threshold) {
            debug!("Header scan at {label:?} collected a navigation menu, discarding");
            return Vec::new();
        }
        debug!("Header scan at {label:?} collected {} lines", lines.len());
        return lines;
    }
    Vec::new()
}

/// When the matched label sits inside a short paragraph/div, that parent
/// *is* the label wrapper and the walk should start from it, otherwise
/// the walk would only visit the label's own siblings inside the wrapper.
fn promote_label_wrapper<'a>(element: ElementRef<'a>, config: &ScrapeConfig) -> ElementRef<'a> {
    if let Some(parent) = element.parent().and_then(ElementRef::wrap) {
        let name = parent.value().name();
        if (name == "p" || name == "div")
            && normalize(&parent.text().collect::<String>()).chars().count()
                < config.max_label_wrapper_len
        {
            return parent;
        }
    }
    element
}

fn walk_siblings(
    anchor: ElementRef,
    start: &Regex,
    stop: &Regex,
    config: &ScrapeConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut visited = 0usize;

    for node in anchor.next_siblings() {
        let Some(sibling) = ElementRef::wrap(node) else {
            continue;
        };
        if visited >= config.max_sibling_walk {
            break;
        }
        visited += 1;

        let text = normalize(&sibling.text().collect::<String>());
        let name = sibling.value().name();

        // A stop-keyword hit only counts as a section boundary when the
        // sibling looks like a heading; a long paragraph mentioning the
        // keyword incidentally must not end the scan.
        if stop.is_match(&text)
            && (matches!(name, "h2" | "h3" | "h4" | "strong")
                || text.chars().count() < config.max_header_len)
        {
            break;
        }

        match name {
            "ul" | "ol" => {
                for item in sibling.select(&LIST_ITEM) {
                    let line = normalize(&item.text().collect::<String>());
                    if !line.is_empty() {
                        lines.push(line);
                    }
                }
            }
            "div" | "p" | "section" => {
                let paragraphs: Vec<_> = sibling.select(&PARAGRAPH).collect();
                if !paragraphs.is_empty() {
                    for paragraph in paragraphs {
                        let line = normalize(&paragraph.text().collect::<String>());
                        if is_valid_line(&line, start, stop, config) {
                            lines.push(line);
                        }
                    }
                } else {
                    let html = sibling.inner_html();
                    if LINE_BREAK.is_match(&html) {
                        for fragment in LINE_BREAK.split(&html) {
                            let line = normalize(&fragment_text(fragment));
                            if is_valid_line(&line, start, stop, config) {
                                lines.push(line);
                            }
                        }
                    } else if is_valid_line(&text, start, stop, config) {
                        lines.push(text);
                    }
                }
            }
            _ => {}
        }
    }
    lines
}

/// A scanned line is kept only if it has content beyond one character,
/// does not re-capture the section label, does not match the stop
/// pattern, and is not chrome noise in isolation.
fn is_valid_line(line: &str, start: &Regex, stop: &Regex, config: &ScrapeConfig) -> bool {
    !line.is_empty()
        && line.chars().count() > 1
        && !start.is_match(line)
        && !stop.is_match(line)
        && !is_navigation_noise(
            &[line.to_string()],
            &config.noise_keywords,
            config.noise_match_threshold,
        )
}
