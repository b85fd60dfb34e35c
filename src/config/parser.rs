use crate::config::types::ScraperConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ScraperConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<ScraperConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates a configuration from TOML text
///
/// Missing keys fall back to their defaults.
///
/// # Example
///
/// ```
/// use eiga_reviews::config::parse_config;
///
/// let config = parse_config("movie-id = \"100\"").unwrap();
/// assert_eq!(config.movie_id, "100");
/// assert_eq!(config.page_size, 20);
/// ```
pub fn parse_config(content: &str) -> Result<ScraperConfig, ConfigError> {
    let config: ScraperConfig = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}
