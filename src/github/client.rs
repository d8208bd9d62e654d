//! GitHub API client and the single dispatch path every endpoint uses.
//!
//! Endpoint methods live next to their resource (`users`, `repositories`,
//! `search`) as further `impl` blocks on [`GithubClient`]. Each one builds an
//! [`Endpoint`] and hands it to [`GithubClient::dispatch`], which resolves the
//! credential, builds the request, performs the GET, and classifies the
//! response.

use std::time::Duration;

use serde::Deserialize;

use crate::config::GithonConfig;

use super::classifier::{ResponseOutcome, classify};
use super::error::GithubError;
use super::locator::{Endpoint, LookupContext};
use super::rate_limit::RateLimitInfo;
use super::request::{DEFAULT_API_BASE, RequestBuilder};
use super::token::{AccessToken, TokenResolver};
use super::transport::{HttpTransport, ReqwestTransport, TransportConfig};

/// Per-call overrides.
///
/// # Example
///
/// ```
/// use githon::github::{AccessToken, CallOptions};
///
/// let token = AccessToken::parse("ghp_example").expect("non-blank token");
/// let options = CallOptions::new()
///     .with_token(token)
///     .if_modified_since("2017-10-13T03:03:57Z");
/// assert_eq!(options.last_modified(), Some("2017-10-13T03:03:57Z"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    token: Option<AccessToken>,
    last_modified: Option<String>,
}

impl CallOptions {
    /// Options with no token override and no conditional timestamp.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            token: None,
            last_modified: None,
        }
    }

    /// Uses `token` for this call instead of the client default.
    #[must_use]
    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Makes the call conditional on the resource having changed since
    /// `timestamp` (`YYYY-MM-DDTHH:MM:SSZ`).
    #[must_use]
    pub fn if_modified_since(mut self, timestamp: impl Into<String>) -> Self {
        self.last_modified = Some(timestamp.into());
        self
    }

    /// Copy of these options with the conditional timestamp removed.
    #[must_use]
    pub fn unconditional(&self) -> Self {
        Self {
            token: self.token.clone(),
            last_modified: None,
        }
    }

    /// Token override for this call.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Conditional timestamp for this call.
    #[must_use]
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }
}

/// Synchronous GitHub REST API v3 client.
///
/// The client holds no mutable state; it is `Send + Sync` whenever its
/// transport is.
#[derive(Debug, Clone)]
pub struct GithubClient<T = ReqwestTransport> {
    requests: RequestBuilder,
    tokens: TokenResolver,
    transport: T,
}

impl GithubClient<ReqwestTransport> {
    /// Creates a client for `https://api.github.com` with default transport
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(default_token: Option<AccessToken>) -> Result<Self, GithubError> {
        let transport = ReqwestTransport::new(&TransportConfig::default())?;
        Self::with_transport(DEFAULT_API_BASE, default_token, transport)
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Configuration`] when the configuration fails
    /// [`GithonConfig::validate`] or the HTTP client cannot be built.
    pub fn from_config(config: &GithonConfig) -> Result<Self, GithubError> {
        config.validate()?;
        let transport = ReqwestTransport::new(&TransportConfig {
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        })?;
        let default_token = config
            .resolve_default_token()
            .and_then(AccessToken::parse);

        Self::with_transport(config.api_base_url.as_str(), default_token, transport)
    }
}

impl<T: HttpTransport> GithubClient<T> {
    /// Creates a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidUrl`] when `api_base` is not an absolute
    /// URL.
    pub fn with_transport(
        api_base: &str,
        default_token: Option<AccessToken>,
        transport: T,
    ) -> Result<Self, GithubError> {
        Ok(Self {
            requests: RequestBuilder::new(api_base)?,
            tokens: TokenResolver::new(default_token),
            transport,
        })
    }

    /// Client-level default credential.
    #[must_use]
    pub const fn default_token(&self) -> Option<&AccessToken> {
        self.tokens.default_token()
    }

    /// Sends one GET request for `endpoint` and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidPathSegment`] or
    /// [`GithubError::InvalidDateTimeFormat`] before any network traffic
    /// when a name or the conditional timestamp is malformed, a transport
    /// error when no response arrives, or the classified API error.
    pub fn dispatch(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, String)],
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        endpoint.check_path_params()?;
        let credential = self.tokens.resolve(options.token());
        let request = self.requests.build(
            endpoint.template(),
            endpoint.path_params(),
            credential,
            query,
            options.last_modified(),
        )?;

        tracing::debug!(
            "GET {} (authenticated: {}, conditional: {})",
            endpoint.template(),
            credential.is_some(),
            options.last_modified().is_some()
        );

        let response = self.transport.get(request.url(), request.headers())?;
        tracing::debug!(
            "GET {} answered {}",
            endpoint.template(),
            response.status()
        );

        classify(&response, endpoint.lookup(), credential)
    }

    /// Fetches the rate limit record for the active credential.
    ///
    /// The conditional timestamp in `options` is ignored; quota reports are
    /// never cached.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidCredential`] when the token is rejected,
    /// [`GithubError::Decode`] when the record is missing or malformed, or
    /// any other dispatch error.
    pub fn rate_limit(&self, options: &CallOptions) -> Result<RateLimitInfo, GithubError> {
        let endpoint = Endpoint::new("rate_limit", Vec::new(), LookupContext::RateLimit);
        let payload = self
            .dispatch(&endpoint, &[], &options.unconditional())?
            .into_payload()
            .ok_or_else(|| GithubError::Decode {
                message: "rate limit response had no body".to_owned(),
            })?;

        let report: RateLimitReport =
            serde_json::from_value(payload).map_err(|error| GithubError::Decode {
                message: format!("rate limit record is malformed: {error}"),
            })?;

        Ok(report.rate)
    }

    /// Remaining requests in the current window for the active credential.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`GithubClient::rate_limit`].
    pub fn remaining_requests(&self, options: &CallOptions) -> Result<u32, GithubError> {
        self.rate_limit(options).map(|info| info.remaining())
    }
}

#[derive(Debug, Deserialize)]
struct RateLimitReport {
    rate: RateLimitInfo,
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
