//! Error types exposed by the GitHub dispatch layer.
//!
//! Every failure a caller can observe is a variant of [`GithubError`]. Each
//! variant carries a fixed-shape payload, so callers match on the kind rather
//! than inspecting HTTP status codes.

use thiserror::Error;

/// Errors surfaced while building requests or interpreting GitHub responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GithubError {
    /// GitHub answered 401 for the credential used on the call.
    #[error(
        "the access token {} does not have permission to access the requested resource or has expired",
        redacted_credential(.credential.as_deref())
    )]
    InvalidCredential {
        /// Credential sent with the rejected request, if any.
        credential: Option<String>,
    },

    /// GitHub answered 403 with no remaining quota in the current window.
    #[error(
        "GitHub API rate limit exceeded ({remaining} of {} requests remaining)",
        display_limit(.limit.as_ref())
    )]
    RateLimitExceeded {
        /// Value of the `X-RateLimit-Remaining` header.
        remaining: u32,
        /// Value of the `X-RateLimit-Limit` header when GitHub sent one.
        limit: Option<u32>,
    },

    /// No user exists with the given numeric identifier.
    #[error("GitHub user with ID {user_id} does not exist")]
    UserIdNotFound {
        /// Identifier that was looked up.
        user_id: u64,
    },

    /// No user exists with the given login.
    #[error("GitHub user with username '{username}' does not exist")]
    UsernameNotFound {
        /// Login that was looked up.
        username: String,
    },

    /// No repository exists with the given numeric identifier.
    #[error("repository with ID {repository_id} does not exist")]
    RepositoryIdNotFound {
        /// Identifier that was looked up.
        repository_id: u64,
    },

    /// No repository with the given name exists for the owner.
    #[error("repository '{repository}' does not exist for user '{owner}'")]
    RepositoryNameNotFound {
        /// Owner login that was looked up.
        owner: String,
        /// Repository name that was looked up.
        repository: String,
    },

    /// GitHub failed with a server-side error.
    #[error("an unexpected error occurred on the GitHub API server (status {status})")]
    UpstreamError {
        /// HTTP status returned by GitHub, between 500 and 509.
        status: u16,
    },

    /// The search endpoint rejected the query.
    #[error("search query '{query}' is invalid")]
    InvalidQuery {
        /// Query string sent to the search endpoint.
        query: String,
    },

    /// A last-modified timestamp was not `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("'{value}' is not a valid ISO-8601 timestamp (expected YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidDateTimeFormat {
        /// Timestamp exactly as supplied by the caller.
        value: String,
    },

    /// A login or repository name would change the request path.
    #[error("'{value}' is not a valid GitHub login or repository name")]
    InvalidPathSegment {
        /// Name exactly as supplied by the caller.
        value: String,
    },

    /// Search pagination parameters are out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The configured API root could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("GitHub response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or applied.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

/// Masks all but the last four characters of a credential.
fn redacted_credential(credential: Option<&str>) -> String {
    let Some(value) = credential else {
        return "(none)".to_owned();
    };

    let length = value.chars().count();
    if length <= 4 {
        return "'****'".to_owned();
    }

    let visible: String = value.chars().skip(length - 4).collect();
    format!("'****{visible}'")
}

fn display_limit(limit: Option<&u32>) -> String {
    limit.map_or_else(|| "unknown".to_owned(), ToString::to_string)
}
