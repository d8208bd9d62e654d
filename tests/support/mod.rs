//! Shared helpers for integration tests against a mock GitHub API.

pub mod matchers;
pub mod runtime;

use githon::GithubClient;
use githon::github::{AccessToken, ReqwestTransport, TransportConfig};

/// Builds a reqwest-backed client pointed at `server_uri`.
///
/// # Panics
///
/// Panics if the HTTP client cannot be constructed.
pub fn client_for(server_uri: &str, default_token: Option<&str>) -> GithubClient {
    let transport = ReqwestTransport::new(&TransportConfig::default())
        .unwrap_or_else(|error| panic!("failed to build transport: {error}"));
    GithubClient::with_transport(
        server_uri,
        default_token.and_then(AccessToken::parse),
        transport,
    )
    .unwrap_or_else(|error| panic!("failed to build client: {error}"))
}
