//! GitHub REST API v3 access.
//!
//! Every endpoint goes through the same pipeline: pick the credential for the
//! call, build the URL and conditional headers, issue a blocking GET, and
//! classify the response into a payload, a "not modified" marker, or a typed
//! error. Authentication uses the `access_token` query parameter.

pub mod classifier;
pub mod client;
pub mod datetime;
pub mod error;
pub mod locator;
pub mod rate_limit;
pub mod repositories;
pub mod request;
pub mod search;
pub mod token;
pub mod transport;
pub mod users;

pub use classifier::{ResponseOutcome, classify};
pub use client::{CallOptions, GithubClient};
pub use datetime::to_http_date;
pub use error::GithubError;
pub use locator::{Endpoint, LookupContext, LookupKind, RepositoryLocator, UserLocator};
pub use rate_limit::{RateLimitInfo, RateLimitSnapshot};
pub use repositories::{RepositoryAggregate, RepositoryResource};
pub use request::{PreparedRequest, RequestBuilder};
pub use search::SearchParams;
pub use token::{AccessToken, TokenResolver};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, TransportConfig};
pub use users::UserCollection;

#[cfg(test)]
pub use transport::MockHttpTransport;
