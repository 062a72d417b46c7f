use thiserror::Error;

/// Errors that can occur while fetching or extracting a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch the page from its URL
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error building HTTP request headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The input HTML was empty, so no document tree could be built
    #[error("HTML document is empty, nothing to extract")]
    EmptyDocument,

    /// A label or stop pattern in the scrape configuration failed to compile
    #[error("Invalid pattern in scrape configuration: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
