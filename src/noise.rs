//! Navigation/boilerplate detection for candidate line lists.
//!
//! A scraped "ingredient list" is sometimes the site's nav menu or footer.
//! One coincidental keyword hit (say an ingredient brand called "Print")
//! must not disqualify a whole list, so a list only counts as noise once
//! two or more of its lines contain a chrome keyword.

/// Case-insensitive substring check of `lines` against `keywords`.
/// Returns true when at least `threshold` lines contain any keyword.
pub fn is_navigation_noise(lines: &[String], keywords: &[String], threshold: usize) -> bool {
    if lines.is_empty() {
        return false;
    }
    let matches = lines
        .iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|kw| lower.contains(&kw.to_lowercase()))
        })
        .count();
    matches >= threshold
}
