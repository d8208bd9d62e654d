//! Turns raw GitHub responses into outcomes or typed errors.
//!
//! Rules are applied in a fixed order and the first match wins:
//!
//! 1. `304 Not Modified` is a successful "nothing changed" outcome.
//! 2. `403` with `X-RateLimit-Remaining: 0` is an exhausted quota.
//! 3. `401` means the credential was rejected.
//! 4. `404` becomes the not-found error for whatever was looked up.
//! 5. `500`..=`509` is an upstream failure.
//! 6. Anything else is decoded as a JSON payload.

use http::StatusCode;
use serde_json::Value;

use super::error::GithubError;
use super::locator::LookupContext;
use super::rate_limit::RateLimitSnapshot;
use super::token::AccessToken;
use super::transport::RawResponse;

/// Successful result of a dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Decoded JSON payload; an empty body decodes to `{}`.
    Success(Value),
    /// The resource has not changed since the supplied timestamp.
    NotModified,
}

impl ResponseOutcome {
    /// Returns the payload, or `None` for [`ResponseOutcome::NotModified`].
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::NotModified => None,
        }
    }

    /// Consumes the outcome and returns the payload if there is one.
    #[must_use]
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::NotModified => None,
        }
    }

    /// Returns true when GitHub answered 304.
    #[must_use]
    pub const fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified)
    }
}

/// Classifies a response received for `lookup`.
///
/// `credential` is the token that was actually sent, so a 401 can report it.
///
/// # Errors
///
/// Returns the [`GithubError`] variant selected by the status code and
/// lookup context, or [`GithubError::Decode`] when a success body is not
/// JSON.
pub fn classify(
    response: &RawResponse,
    lookup: &LookupContext,
    credential: Option<&AccessToken>,
) -> Result<ResponseOutcome, GithubError> {
    let status = response.status();

    if status == StatusCode::NOT_MODIFIED {
        return Ok(ResponseOutcome::NotModified);
    }

    if status == StatusCode::FORBIDDEN {
        let snapshot = RateLimitSnapshot::from_headers(response.headers());
        if snapshot.is_exhausted() {
            return Err(GithubError::RateLimitExceeded {
                remaining: 0,
                limit: snapshot.limit(),
            });
        }
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(invalid_credential(credential));
    }

    if status == StatusCode::NOT_FOUND {
        return Err(not_found(lookup, credential));
    }

    if is_upstream_failure(status) {
        return Err(GithubError::UpstreamError {
            status: status.as_u16(),
        });
    }

    decode_body(response.body()).map(ResponseOutcome::Success)
}

fn is_upstream_failure(status: StatusCode) -> bool {
    (500..=509).contains(&status.as_u16())
}

fn invalid_credential(credential: Option<&AccessToken>) -> GithubError {
    GithubError::InvalidCredential {
        credential: credential.map(|token| token.value().to_owned()),
    }
}

fn not_found(lookup: &LookupContext, credential: Option<&AccessToken>) -> GithubError {
    match lookup {
        LookupContext::UserId(user_id) => GithubError::UserIdNotFound { user_id: *user_id },
        LookupContext::Username(username) => GithubError::UsernameNotFound {
            username: username.clone(),
        },
        LookupContext::RepositoryId(repository_id) => GithubError::RepositoryIdNotFound {
            repository_id: *repository_id,
        },
        LookupContext::RepositoryName { owner, repository } => {
            GithubError::RepositoryNameNotFound {
                owner: owner.clone(),
                repository: repository.clone(),
            }
        }
        LookupContext::Search { query } => GithubError::InvalidQuery {
            query: query.clone(),
        },
        LookupContext::AuthenticatedUser | LookupContext::RateLimit => {
            invalid_credential(credential)
        }
    }
}

fn decode_body(body: &str) -> Result<Value, GithubError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_str(body).map_err(|error| GithubError::Decode {
        message: error.to_string(),
    })
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
