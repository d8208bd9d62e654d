//! User search.

use super::classifier::ResponseOutcome;
use super::client::{CallOptions, GithubClient};
use super::error::GithubError;
use super::locator::{Endpoint, LookupContext};
use super::transport::HttpTransport;

/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Pagination for [`GithubClient::search_users`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Page number to fetch (1-based). Defaults to 1.
    pub page: u32,
    /// Results per page (max 100). Defaults to 100.
    pub per_page: u8,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }
}

impl SearchParams {
    /// Creates pagination parameters.
    #[must_use]
    pub const fn new(page: u32, per_page: u8) -> Self {
        Self { page, per_page }
    }

    /// Checks the values against the limits GitHub enforces.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidPagination`] when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn validate(self) -> Result<(), GithubError> {
        if self.page == 0 {
            return Err(GithubError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if self.per_page == 0 {
            return Err(GithubError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if self.per_page > MAX_PER_PAGE {
            return Err(GithubError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PER_PAGE}"),
            });
        }

        Ok(())
    }

    fn query_pairs(self, query: &str) -> [(&'static str, String); 4] {
        [
            ("q", query.to_owned()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("type", "Users".to_owned()),
        ]
    }
}

impl<T: HttpTransport> GithubClient<T> {
    /// `GET /search/users` with GitHub search syntax, e.g. `language:rust`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidPagination`] without sending a request
    /// when `params` is out of range, [`GithubError::InvalidQuery`] when
    /// GitHub rejects the query, or any other dispatch error.
    pub fn search_users(
        &self,
        query: &str,
        params: SearchParams,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        params.validate()?;

        let endpoint = Endpoint::new(
            "search/users",
            Vec::new(),
            LookupContext::Search {
                query: query.to_owned(),
            },
        );

        self.dispatch(&endpoint, &params.query_pairs(query), options)
    }
}
