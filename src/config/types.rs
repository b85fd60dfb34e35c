use crate::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Movie scraped when no identifier is supplied
pub const DEFAULT_MOVIE_ID: &str = "50969";

/// Review listing URL with `{movie_id}` and `{page_num}` placeholders
pub const DEFAULT_URL_TEMPLATE: &str = "https://eiga.com/movie/{movie_id}/review/all/{page_num}/";

const MOVIE_ID_PLACEHOLDER: &str = "{movie_id}";
const PAGE_NUM_PLACEHOLDER: &str = "{page_num}";

/// Scraper configuration
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScraperConfig {
    /// Identifier of the movie whose reviews are collected
    pub movie_id: String,

    /// Page URL template containing `{movie_id}` and `{page_num}`
    pub url_template: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Number of reviews the site lists per page
    pub page_size: u32,

    /// Pause between two consecutive page requests (milliseconds)
    pub wait_ms: u64,

    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            movie_id: DEFAULT_MOVIE_ID.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            page_size: 20,
            wait_ms: 1000,
            headers: BTreeMap::new(),
        }
    }
}

impl ScraperConfig {
    /// Default configuration for the given movie
    pub fn for_movie(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            ..Self::default()
        }
    }

    /// Inter-page pause as a `Duration`
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    /// The URL template with the movie id filled in
    pub fn base_url(&self) -> String {
        self.url_template
            .replace(MOVIE_ID_PLACEHOLDER, &self.movie_id)
    }

    /// Builds the URL of a 1-based review page
    ///
    /// # Example
    ///
    /// ```
    /// use eiga_reviews::ScraperConfig;
    ///
    /// let config = ScraperConfig::for_movie("100");
    /// let url = config.page_url(2).unwrap();
    /// assert_eq!(url.as_str(), "https://eiga.com/movie/100/review/all/2/");
    /// ```
    pub fn page_url(&self, page_num: u32) -> Result<Url, ConfigError> {
        let raw = self
            .base_url()
            .replace(PAGE_NUM_PLACEHOLDER, &page_num.to_string());

        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", raw, e)))
    }

    pub(crate) fn has_placeholders(&self) -> bool {
        self.url_template.contains(MOVIE_ID_PLACEHOLDER)
            && self.url_template.contains(PAGE_NUM_PLACEHOLDER)
    }
}
