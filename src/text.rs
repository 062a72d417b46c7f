use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Collapse whitespace runs (including non-breaking spaces) to a single
/// space and trim the ends. Entities are decoded first; decoding twice
/// handles double-escaped text from sloppy CMS output. Total function:
/// any input, including empty, yields a clean (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let decoded = decode_html_entities(&decode_html_entities(text).into_owned()).into_owned();
    WHITESPACE_RUN.replace_all(&decoded, " ").trim().to_string()
}
