use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Tuning data for one extraction run: keyword lists, curated selector
/// lists, label/stop patterns and heuristic thresholds.
///
/// Everything here has a built-in default matching long-observed
/// recipe-blog conventions; the struct exists so tests and per-locale
/// deployments can override any of it without touching code.
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapeConfig {
    /// Site-chrome keyword fragments used by the noise classifier
    #[serde(default = "default_noise_keywords")]
    pub noise_keywords: Vec<String>,
    /// How many keyword-bearing lines make a list count as navigation
    #[serde(default = "default_noise_match_threshold")]
    pub noise_match_threshold: usize,
    /// Upper bound on the header-anchored sibling walk
    #[serde(default = "default_max_sibling_walk")]
    pub max_sibling_walk: usize,
    /// Max length (chars) for a heading to count as a section label
    #[serde(default = "default_max_header_len")]
    pub max_header_len: usize,
    /// Max length (chars) for a parent to count as a label wrapper
    #[serde(default = "default_max_label_wrapper_len")]
    pub max_label_wrapper_len: usize,
    /// Title selectors tried after the first h1 and before <title>
    #[serde(default = "default_title_selectors")]
    pub title_selectors: Vec<String>,
    /// Image selectors tried after the og:image meta tag, in order
    #[serde(default = "default_image_selectors")]
    pub image_selectors: Vec<String>,
    /// Curated ingredient selectors, most specific markup first
    #[serde(default = "default_ingredient_selectors")]
    pub ingredient_selectors: Vec<String>,
    /// Last-resort generic ingredient selectors, no label stripping
    #[serde(default = "default_ingredient_fallback_selectors")]
    pub ingredient_fallback_selectors: Vec<String>,
    /// Curated instruction selectors, most specific markup first
    #[serde(default = "default_method_selectors")]
    pub method_selectors: Vec<String>,
    /// Last-resort generic instruction selectors, no label stripping
    #[serde(default = "default_method_fallback_selectors")]
    pub method_fallback_selectors: Vec<String>,
    /// Pattern matching an ingredients section label
    #[serde(default = "default_ingredient_label_pattern")]
    pub ingredient_label_pattern: String,
    /// Pattern matching an instructions section label
    #[serde(default = "default_method_label_pattern")]
    pub method_label_pattern: String,
    /// Pattern matching content after the instructions section
    /// (notes, comments, sharing widgets)
    #[serde(default = "default_method_stop_pattern")]
    pub method_stop_pattern: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            noise_keywords: default_noise_keywords(),
            noise_match_threshold: default_noise_match_threshold(),
            max_sibling_walk: default_max_sibling_walk(),
            max_header_len: default_max_header_len(),
            max_label_wrapper_len: default_max_label_wrapper_len(),
            title_selectors: default_title_selectors(),
            image_selectors: default_image_selectors(),
            ingredient_selectors: default_ingredient_selectors(),
            ingredient_fallback_selectors: default_ingredient_fallback_selectors(),
            method_selectors: default_method_selectors(),
            method_fallback_selectors: default_method_fallback_selectors(),
            ingredient_label_pattern: default_ingredient_label_pattern(),
            method_label_pattern: default_method_label_pattern(),
            method_stop_pattern: default_method_stop_pattern(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with SCRAPER__ prefix
    /// 2. scraper.toml file in the current directory
    /// 3. Built-in defaults
    ///
    /// Environment variable format: SCRAPER__MAX_SIBLING_WALK
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("scraper").required(false))
            .add_source(
                Environment::with_prefix("SCRAPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn default_noise_keywords() -> Vec<String> {
    strings(&[
        "דף הבית",
        "מתכונים",
        "צור קשר",
        "אודות",
        "חיפוש",
        "סדנאות",
        "נגישות",
        "home",
        "contact",
        "search",
        "print",
        "email",
    ])
}

fn default_noise_match_threshold() -> usize {
    2
}

fn default_max_sibling_walk() -> usize {
    60
}

fn default_max_header_len() -> usize {
    100
}

fn default_max_label_wrapper_len() -> usize {
    150
}

fn default_title_selectors() -> Vec<String> {
    strings(&[".ArticleTitle"])
}

fn default_image_selectors() -> Vec<String> {
    strings(&[".wprm-recipe-image img", "main img"])
}

fn default_ingredient_selectors() -> Vec<String> {
    strings(&[
        ".wprm-recipe-ingredient",
        ".wprm-recipe-ingredients li",
        ".recipeIngredients li span",
        ".recipeIngredients li",
        ".penci-recipe-ingredients p",
        ".penci-recipe-ingredients li",
        "[itemprop='recipeIngredient']",
        "#ingredients p",
        "#ingredients",
    ])
}

fn default_ingredient_fallback_selectors() -> Vec<String> {
    strings(&[".ingredients li", ".recipe-ingredients li"])
}

fn default_method_selectors() -> Vec<String> {
    strings(&[
        ".wprm-recipe-instruction",
        ".wprm-recipe-instructions li",
        ".recipeInstructions p",
        ".recipeInstructions li",
        "[itemprop='recipeInstructions']",
        ".penci-recipe-method p, .penci-recipe-method li",
        ".instructions li",
        ".recipe-steps li",
    ])
}

fn default_method_fallback_selectors() -> Vec<String> {
    strings(&[".instructions li", ".recipe-steps li", ".directions li"])
}

fn default_ingredient_label_pattern() -> String {
    "(?i)(מצרכים|רכיבים|מרכיבים|חומרים)".to_string()
}

fn default_method_label_pattern() -> String {
    // The long forms ("אופן הכנה" etc.) are what most blogs use; bare
    // "הכנה" headings exist too and must anchor/stop the same scans.
    "(?i)(אופן|הוראות|תהליך|שלבי)(\\s+ה)?\\s*כנה|הכנה|הכנות".to_string()
}

fn default_method_stop_pattern() -> String {
    "(?i)הערות|תגובות|comments|share|בתיאבון|בתאבון|טיפים".to_string()
}
