use crate::config::types::ScraperConfig;
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Validates the entire configuration
pub fn validate(config: &ScraperConfig) -> Result<(), ConfigError> {
    validate_movie_id(&config.movie_id)?;
    validate_url_template(config)?;
    validate_paging(config)?;
    validate_user_agent(&config.user_agent)?;
    validate_headers(&config.headers)?;
    Ok(())
}

fn validate_movie_id(movie_id: &str) -> Result<(), ConfigError> {
    if movie_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "movie_id cannot be empty".to_string(),
        ));
    }

    if movie_id.contains(&['/', '?', '#'][..]) || movie_id.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "movie_id must be a single path segment, got '{}'",
            movie_id
        )));
    }

    Ok(())
}

/// Checks both placeholders are present and the first page URL is http(s)
fn validate_url_template(config: &ScraperConfig) -> Result<(), ConfigError> {
    if !config.has_placeholders() {
        return Err(ConfigError::Validation(format!(
            "url_template must contain {{movie_id}} and {{page_num}}, got '{}'",
            config.url_template
        )));
    }

    let url = config.page_url(1)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "url_template must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

fn validate_paging(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.page_size < 1 {
        return Err(ConfigError::Validation(format!(
            "page_size must be >= 1, got {}",
            config.page_size
        )));
    }

    Ok(())
}

fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    HeaderValue::from_str(user_agent).map_err(|_| {
        ConfigError::Validation(format!("user_agent is not a valid header value: '{}'", user_agent))
    })?;

    Ok(())
}

fn validate_headers(headers: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigError::Validation(format!("invalid header name '{}'", name))
        })?;

        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::Validation(format!("invalid value for header '{}'", name))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&ScraperConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_movie_id() {
        let config = ScraperConfig::for_movie("  ");
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_movie_id_with_slash() {
        let config = ScraperConfig::for_movie("123/456");
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_page_placeholder() {
        let config = ScraperConfig {
            url_template: "https://eiga.com/movie/{movie_id}/review/all/".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_non_http_scheme() {
        let config = ScraperConfig {
            url_template: "ftp://eiga.com/movie/{movie_id}/review/all/{page_num}/".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_plain_http_allowed() {
        let config = ScraperConfig {
            url_template: "http://127.0.0.1:8080/movie/{movie_id}/review/all/{page_num}/"
                .to_string(),
            ..ScraperConfig::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_page_size() {
        let config = ScraperConfig {
            page_size: 0,
            ..ScraperConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent() {
        let config = ScraperConfig {
            user_agent: String::new(),
            ..ScraperConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_header_name() {
        let mut config = ScraperConfig::default();
        config
            .headers
            .insert("Bad Header".to_string(), "value".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_header_value() {
        let mut config = ScraperConfig::default();
        config
            .headers
            .insert("X-Test".to_string(), "line\nbreak".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_valid_extra_header() {
        let mut config = ScraperConfig::default();
        config
            .headers
            .insert("Accept-Language".to_string(), "ja,en;q=0.8".to_string());
        assert!(validate(&config).is_ok());
    }
}
