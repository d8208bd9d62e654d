//! Client configuration loaded from CLI, environment, and files.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – `https://api.github.com`, a 30 second timeout, and a
//!    `githon/<version>` user agent
//! 2. **Configuration file** – `.githon.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GITHON_TOKEN`, `GITHON_API_BASE_URL`,
//!    `GITHON_TIMEOUT_SECONDS`, `GITHON_USER_AGENT`
//! 4. **Command-line arguments** – `--token`/`-t`, `--api-base-url`,
//!    `--timeout-seconds`, `--user-agent`
//!
//! When no layer supplies a token, [`GithonConfig::resolve_default_token`]
//! falls back to `GITHUB_TOKEN`.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base_url = "https://github.example.com/api/v3"
//! timeout_seconds = 10
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::GithubError;
use crate::github::request::DEFAULT_API_BASE;
use crate::github::transport::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Environment variable read when no token is configured.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Client configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use githon::{GithonConfig, GithubClient};
/// use ortho_config::OrthoConfig;
///
/// let config = GithonConfig::load().expect("failed to load configuration");
/// let client = GithubClient::from_config(&config).expect("client should build");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITHON",
    discovery(
        dotfile_name = ".githon.toml",
        config_file_name = "githon.toml",
        app_name = "githon"
    )
)]
pub struct GithonConfig {
    /// Default access token used when a call does not supply its own.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GITHON_TOKEN` or `GITHUB_TOKEN` (fallback)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Root of the REST API, for GitHub Enterprise or test servers.
    #[ortho_config()]
    pub api_base_url: String,

    /// Whole-request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// `User-Agent` header sent with every request.
    #[ortho_config()]
    pub user_agent: String,
}

impl Default for GithonConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: DEFAULT_API_BASE.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl GithonConfig {
    /// Returns the configured token, falling back to `GITHUB_TOKEN`.
    ///
    /// Blank values are treated as absent.
    #[must_use]
    pub fn resolve_default_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Checks that the loaded values can build a client.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Configuration`] when the API root is not an
    /// absolute URL, the timeout is zero, or the user agent is blank.
    pub fn validate(&self) -> Result<(), GithubError> {
        Url::parse(&self.api_base_url).map_err(|error| GithubError::Configuration {
            message: format!("api_base_url '{}' is invalid: {error}", self.api_base_url),
        })?;

        if self.timeout_seconds == 0 {
            return Err(GithubError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(GithubError::Configuration {
                message: "user_agent must not be blank".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
