//! Rate limit information from GitHub API responses.
//!
//! Every GitHub response carries `X-RateLimit-Limit` and
//! `X-RateLimit-Remaining` headers. [`RateLimitSnapshot`] captures them
//! without assuming they are present. [`RateLimitInfo`] is the full record
//! returned by the `/rate_limit` endpoint.

use std::time::{SystemTime, UNIX_EPOCH};

use http::HeaderMap;
use serde::Deserialize;

/// Header carrying the remaining request count.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the request ceiling for the window.
pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";

/// Remaining and limit counts read from response headers.
///
/// Either value is `None` when the header is absent or not an integer.
///
/// # Example
///
/// ```
/// use githon::github::RateLimitSnapshot;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-ratelimit-remaining", "0".parse().expect("valid header"));
///
/// let snapshot = RateLimitSnapshot::from_headers(&headers);
/// assert!(snapshot.is_exhausted());
/// assert_eq!(snapshot.limit(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    remaining: Option<u32>,
    limit: Option<u32>,
}

impl RateLimitSnapshot {
    /// Creates a snapshot from already-parsed values.
    #[must_use]
    pub const fn new(remaining: Option<u32>, limit: Option<u32>) -> Self {
        Self { remaining, limit }
    }

    /// Reads the rate limit headers, treating anything unreadable as unknown.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: header_as_u32(headers, RATE_LIMIT_REMAINING),
            limit: header_as_u32(headers, RATE_LIMIT_LIMIT),
        }
    }

    /// Remaining requests in the current window, if known.
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Request ceiling for the current window, if known.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns true only when GitHub reported zero remaining requests.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.remaining, Some(0))
    }
}

fn header_as_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.trim().parse::<u32>().ok())
}

/// Rate limit record returned by `GET /rate_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window.
    limit: u32,
    /// Remaining requests in the current window.
    remaining: u32,
    /// Unix timestamp when the rate limit resets.
    reset: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset: reset_at,
        }
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Calculates seconds until the rate limit resets.
    ///
    /// Returns 0 if the reset time has already passed or if the system time
    /// cannot be determined.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.reset.saturating_sub(now)
    }
}
