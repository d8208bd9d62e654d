//! Request assembly: target URL, query string, and conditional headers.
//!
//! This is the only place that decides how query parameters are joined. The
//! credential is always appended last as `access_token`, and omitted entirely
//! when no token is active.

use http::HeaderMap;
use http::header::{HeaderValue, IF_MODIFIED_SINCE};
use url::Url;

use super::datetime::to_http_date;
use super::error::GithubError;
use super::token::AccessToken;

/// Query parameter GitHub reads the credential from.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Default GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// A fully resolved GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    url: Url,
    headers: HeaderMap,
}

impl PreparedRequest {
    /// Target URL including the query string.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Headers to send; empty unless a conditional request was asked for.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Builds requests relative to a fixed API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    api_base: Url,
}

impl RequestBuilder {
    /// Creates a builder for the given API root.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidUrl`] when `api_base` is not an absolute
    /// URL.
    pub fn new(api_base: &str) -> Result<Self, GithubError> {
        let parsed =
            Url::parse(api_base).map_err(|error| GithubError::InvalidUrl(error.to_string()))?;
        Ok(Self { api_base: parsed })
    }

    /// API root requests are built against.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Composes the URL and headers for one call.
    ///
    /// Path parameters replace the `{}` placeholders of `template` in order
    /// and are inserted verbatim. Query values are form-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidDateTimeFormat`] when `last_modified`
    /// is not `YYYY-MM-DDTHH:MM:SSZ`, or [`GithubError::InvalidUrl`] when the
    /// expanded path does not form a valid URL.
    ///
    /// # Panics
    ///
    /// Panics when the number of path parameters differs from the number of
    /// placeholders in `template`; endpoint templates are fixed at compile
    /// time, so a mismatch is a bug in the caller.
    pub fn build<P: AsRef<str>>(
        &self,
        template: &str,
        path_params: &[P],
        credential: Option<&AccessToken>,
        query: &[(&str, String)],
        last_modified: Option<&str>,
    ) -> Result<PreparedRequest, GithubError> {
        let headers = conditional_headers(last_modified)?;
        let path = expand_template(template, path_params);

        let mut url = Url::parse(&format!(
            "{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
        .map_err(|error| GithubError::InvalidUrl(error.to_string()))?;

        let mut pairs: Vec<(&str, &str)> = query
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        if let Some(token) = credential {
            pairs.push((ACCESS_TOKEN_PARAM, token.value()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(PreparedRequest { url, headers })
    }
}

fn expand_template<P: AsRef<str>>(template: &str, path_params: &[P]) -> String {
    let placeholders = template.matches("{}").count();
    assert_eq!(
        placeholders,
        path_params.len(),
        "endpoint template `{template}` expects {placeholders} path parameters"
    );

    let mut values = path_params.iter();
    let mut expanded = String::with_capacity(template.len());
    for (index, piece) in template.split("{}").enumerate() {
        if index > 0
            && let Some(value) = values.next()
        {
            expanded.push_str(value.as_ref());
        }
        expanded.push_str(piece);
    }
    expanded
}

fn conditional_headers(last_modified: Option<&str>) -> Result<HeaderMap, GithubError> {
    let mut headers = HeaderMap::new();

    if let Some(timestamp) = last_modified {
        let http_date = to_http_date(timestamp)?;
        let value = HeaderValue::from_str(&http_date).map_err(|_| {
            GithubError::InvalidDateTimeFormat {
                value: timestamp.to_owned(),
            }
        })?;
        headers.insert(IF_MODIFIED_SINCE, value);
    }

    Ok(headers)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
