//! Eiga-Reviews: a paginated user-review scraper
//!
//! This crate fetches the user review pages of a single movie, extracts the
//! reviewer id, rating, title and review text from each review block, and
//! accumulates the rows into a table while walking the pages in order.

pub mod config;
pub mod crawler;
pub mod logging;
pub mod output;

use thiserror::Error;

/// Main error type for Eiga-Reviews operations
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: FetchError },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failure of a single page request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Eiga-Reviews operations
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ScraperConfig;
pub use crawler::Crawler;
pub use output::{CrawlReport, ResultTable, ReviewRecord, StopReason};
