//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch page content (one attempt, no retry)
//! - Classifying the response into a `FetchResult`

use crate::config::{Config, HttpConfig, UserAgentConfig};
use crate::state::PageState;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Successfully fetched the page (2xx)
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-2xx status
    ///
    /// Not an error for the crawl: the page is treated as empty.
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport failure (connection refused, timeout, DNS, TLS, body decode)
    NetworkError {
        /// Error description
        error: String,
        /// The page state this error maps to
        state: PageState,
    },
}

impl FetchResult {
    /// The page state this result maps to
    pub fn state(&self) -> PageState {
        match self {
            Self::Success { .. } => PageState::Processed,
            Self::HttpError { .. } => PageState::HttpError,
            Self::NetworkError { state, .. } => *state,
        }
    }
}

/// Capability to retrieve the raw text of a single URL
///
/// The crawler only depends on this trait, so the transport can be swapped
/// out (for instance with an in-memory site in tests).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` with a single GET request
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeouts and redirect limit
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_indexer::config::{HttpConfig, UserAgentConfig};
/// use site_indexer::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .redirect(Policy::limited(http.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | `Success` with the body |
/// | Any other status | `HttpError` |
/// | Timeout / connection failure | `NetworkError` → Unreachable |
/// | Body decode or other transport error | `NetworkError` → Failed |
///
/// Redirects are followed by the client itself, up to its configured limit.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    tracing::debug!("Fetching page for url: {}", url);

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                    state: PageState::Failed,
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                    state: PageState::Unreachable,
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                    state: PageState::Unreachable,
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                    state: PageState::Failed,
                }
            }
        }
    }
}

/// `PageFetcher` backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the `user-agent` and `http` configuration sections
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.user_agent, &config.http)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_fetcher() -> HttpFetcher {
        HttpFetcher::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetch_result_state() {
        let success = FetchResult::Success {
            final_url: "https://example.com/".to_string(),
            status_code: 200,
            body: String::new(),
        };
        assert_eq!(success.state(), PageState::Processed);
        assert_eq!(
            FetchResult::HttpError { status_code: 500 }.state(),
            PageState::HttpError
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Some content"))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/page", server.uri());
        let result = test_fetcher().fetch(&url).await;

        assert_eq!(
            result,
            FetchResult::Success {
                final_url: url,
                status_code: 200,
                body: "Some content".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        let user_agent = UserAgentConfig::default().header_value();
        Mock::given(method("GET"))
            .and(header("user-agent", user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_fetcher().fetch(&server.uri()).await;
        assert!(result.state().is_success());
    }

    #[tokio::test]
    async fn test_fetch_handles_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Some error message"))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_fetcher().fetch(&server.uri()).await;
        assert_eq!(result, FetchResult::HttpError { status_code: 400 });
    }

    #[tokio::test]
    async fn test_fetch_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let result = test_fetcher().fetch(&format!("{}/old", server.uri())).await;
        match result {
            FetchResult::Success {
                final_url, body, ..
            } => {
                assert_eq!(final_url, format!("{}/new", server.uri()));
                assert_eq!(body, "moved");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("slow")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = Config {
            http: HttpConfig {
                request_timeout_secs: 1,
                connect_timeout_secs: 1,
                max_redirects: 10,
            },
            ..Config::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();

        let result = fetcher.fetch(&server.uri()).await;
        assert_eq!(result.state(), PageState::Unreachable);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Nothing listens on port 1
        let result = test_fetcher().fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, FetchResult::NetworkError { .. }));
        assert!(!result.state().yields_document());
    }
}
