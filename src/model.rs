use serde::{Deserialize, Serialize};

/// The extracted recipe. Every field is best-effort: an empty string or
/// empty list is valid output, not an error, so callers always have a
/// well-formed structure to hand to a manual-edit fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub method: Vec<String>,
    /// Absolute or relative, exactly as found in the page.
    pub image_url: String,
    pub source_url: String,
}

impl Recipe {
    pub fn new(source_url: &str) -> Self {
        Recipe {
            source_url: source_url.to_string(),
            ..Recipe::default()
        }
    }

    /// True when no strategy extracted anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.ingredients.is_empty()
            && self.method.is_empty()
            && self.image_url.is_empty()
    }
}
