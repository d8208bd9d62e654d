//! Request matchers not provided by `wiremock`.

use wiremock::{Match, Request};

/// Matches when `name` carries exactly `value`.
///
/// `wiremock::matchers::header` splits values on commas, which breaks
/// HTTP-date values such as `Fri, 13 Oct 2017 03:03:57 GMT`.
pub struct HeaderEquals {
    name: &'static str,
    value: String,
}

impl HeaderEquals {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl Match for HeaderEquals {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get(self.name)
            .and_then(|value| value.to_str().ok())
            == Some(self.value.as_str())
    }
}

/// Matches requests that carry no `access_token` query parameter.
pub struct NoAccessToken;

impl Match for NoAccessToken {
    fn matches(&self, request: &Request) -> bool {
        !request
            .url
            .query_pairs()
            .any(|(name, _)| name == "access_token")
    }
}
