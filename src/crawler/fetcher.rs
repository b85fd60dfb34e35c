//! HTTP fetcher implementation
//!
//! One GET per review page. Anything other than a 2xx response, or a
//! transport failure while sending or reading the body, is a `FetchError`;
//! there is no retry at this layer.

use crate::config::ScraperConfig;
use crate::FetchError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// Builds an HTTP client carrying the configured User-Agent and extra headers
///
/// Timeouts are left at the transport defaults.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use eiga_reviews::config::ScraperConfig;
/// use eiga_reviews::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        // Names and values were checked by config validation
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Skipping invalid header '{}'", name),
        }
    }

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns its body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL
///
/// # Returns
///
/// * `Ok(String)` - The response body of a 2xx response
/// * `Err(FetchError)` - Non-success status or transport failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    tracing::trace!("GET {} -> {}", url, status);

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&ScraperConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_sends_configured_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "Mozilla/5.0"))
            .and(header("accept-language", "ja"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = ScraperConfig::default();
        config
            .headers
            .insert("Accept-Language".to_string(), "ja".to_string());
        let client = build_http_client(&config).unwrap();

        let body = fetch_page(&client, &format!("{}/page", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = build_http_client(&ScraperConfig::default()).unwrap();
        let result = fetch_page(&client, &format!("{}/missing", mock_server.uri())).await;

        match result {
            Err(FetchError::Status { status }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind and drop a listener so nothing is accepting on its port
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = build_http_client(&ScraperConfig::default()).unwrap();
        let result = fetch_page(&client, &format!("http://{}/page", addr)).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
