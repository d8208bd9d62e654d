//! Githon: a synchronous client for the GitHub REST API v3.
//!
//! The library fetches user profiles, per-user collections, repositories and
//! their sub-resources, user search results, and rate-limit status. Calls
//! accept an optional per-call access token and an optional last-modified
//! timestamp for conditional requests, and failures surface as
//! [`GithubError`] variants rather than raw status codes.

pub mod config;
pub mod github;

pub use config::GithonConfig;
pub use github::{
    AccessToken, CallOptions, GithubClient, GithubError, RateLimitInfo, RepositoryAggregate,
    RepositoryResource, ResponseOutcome, SearchParams,
};
