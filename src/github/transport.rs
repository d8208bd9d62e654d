//! HTTP transport used to execute prepared requests.
//!
//! The dispatcher only ever issues GET requests and needs the raw status,
//! headers, and body text back, so the seam is a single method. Production
//! code uses a blocking `reqwest` client; tests substitute a mock.

use std::time::Duration;

use http::{HeaderMap, StatusCode};
use reqwest::blocking::Client;
use url::Url;

use super::error::GithubError;

/// Default HTTP timeout applied to every request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent when none is configured. GitHub rejects requests without
/// one.
pub const DEFAULT_USER_AGENT: &str = concat!("githon/", env!("CARGO_PKG_VERSION"));

/// Unclassified HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body text; empty for 304 responses.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}

/// Executes GET requests.
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET request and returns the response whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Network`] when no response could be obtained.
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse, GithubError>;
}

/// Settings for [`ReqwestTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Blocking `reqwest` transport.
///
/// Error messages never include the query string, which carries the
/// credential.
///
/// Must not be driven from inside an async runtime; `reqwest::blocking`
/// panics when used on a runtime worker thread.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Configuration`] when the client cannot be
    /// constructed, for example because the TLS backend fails to initialise.
    pub fn new(config: &TransportConfig) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|error| GithubError::Configuration {
                message: format!("failed to configure GitHub HTTP client: {error}"),
            })?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse, GithubError> {
        let response = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .map_err(|error| GithubError::Network {
                message: format!("request to {} failed: {}", url.path(), error.without_url()),
            })?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.text().map_err(|error| GithubError::Network {
            message: format!("failed to read response body: {}", error.without_url()),
        })?;

        Ok(RawResponse::new(status, response_headers, body))
    }
}
