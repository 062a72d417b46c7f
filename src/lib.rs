pub mod config;
pub mod error;
pub mod extract;
pub mod extractors;
pub mod model;
pub mod noise;
pub mod text;

use log::debug;
use reqwest::header::{HeaderMap, USER_AGENT};

pub use crate::config::ScrapeConfig;
pub use crate::error::ScrapeError;
pub use crate::extract::extract_recipe;
pub use crate::model::Recipe;

/// Fetch a page and run the extraction engine over it with the given
/// configuration. HTTP policy beyond the spoofed user agent (retries,
/// timeouts, caching) is the caller's concern.
pub fn fetch_recipe_with(url: &str, config: &ScrapeConfig) -> Result<Recipe, ScrapeError> {
    // Some hosts refuse requests without a browser user agent
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".parse()?);

    let body = reqwest::blocking::Client::new()
        .get(url)
        .headers(headers)
        .send()?
        .text()?;

    debug!("Fetched {} bytes from {url}", body.len());
    extract_recipe(&body, url, config)
}

/// [`fetch_recipe_with`] using the built-in configuration.
pub fn fetch_recipe(url: &str) -> Result<Recipe, ScrapeError> {
    fetch_recipe_with(url, &ScrapeConfig::default())
}
