use regex::Regex;
use scraper::{ElementRef, Html, Node};
use std::sync::LazyLock;

use crate::text::normalize;

pub mod header_scan;
pub mod json_ld;
pub mod selectors;

/// Line-break markers that turn one element into several lines.
pub(crate) static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break regex is valid"));

// Interactive/decorative sub-nodes removed before single-line text
// extraction (ingredient checkboxes, inline ads, embedded scripts).
const STRIP_TAGS: [&str; 3] = ["input", "script", "style"];
const STRIP_CLASSES: [&str; 2] = ["checkbox", "ad"];

/// Text content of a serialized markup fragment, e.g. one side of a
/// `<br>` split.
pub(crate) fn fragment_text(fragment: &str) -> String {
    let parsed = Html::parse_fragment(fragment);
    parsed.root_element().text().collect()
}

/// Split an element's inner markup on line-break markers, normalizing
/// each fragment into its own line. None when the element has no breaks.
pub(crate) fn split_on_line_breaks(element: ElementRef) -> Option<Vec<String>> {
    let html = element.inner_html();
    if !LINE_BREAK.is_match(&html) {
        return None;
    }
    Some(
        LINE_BREAK
            .split(&html)
            .map(|fragment| normalize(&fragment_text(fragment)))
            .collect(),
    )
}

/// Text content of an element with interactive/decorative sub-nodes
/// skipped, without mutating the document tree.
pub(crate) fn text_without_chrome(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(element) => {
                if STRIP_TAGS.contains(&element.name()) {
                    continue;
                }
                if element.classes().any(|class| STRIP_CLASSES.contains(&class)) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_text_without_chrome_strips_interactive_nodes() {
        let html = r#"
            <html><body>
                <li><input type="checkbox" value="on">2 cups flour<span class="ad">Buy now!</span></li>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let selector = Selector::parse("li").unwrap();
        let li = document.select(&selector).next().unwrap();

        assert_eq!(normalize(&text_without_chrome(li)), "2 cups flour");
    }

    #[test]
    fn test_split_on_line_breaks() {
        let html = "<html><body><p>1 cup sugar<br>2 eggs<br/>pinch of salt</p></body></html>";
        let document = Html::parse_document(html);
        let selector = Selector::parse("p").unwrap();
        let p = document.select(&selector).next().unwrap();

        let lines = split_on_line_breaks(p).unwrap();
        assert_eq!(lines, vec!["1 cup sugar", "2 eggs", "pinch of salt"]);
    }

    #[test]
    fn test_split_without_breaks_is_none() {
        let html = "<html><body><p>just one line</p></body></html>";
        let document = Html::parse_document(html);
        let selector = Selector::parse("p").unwrap();
        let p = document.select(&selector).next().unwrap();

        assert!(split_on_line_breaks(p).is_none());
    }
}
