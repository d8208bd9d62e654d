//! Tests for loading configuration from the environment and CLI arguments.

use rstest::rstest;

use super::helpers::load_isolated;

#[rstest]
fn loads_defaults_without_any_source() {
    let config = load_isolated(
        &[
            ("GITHON_TOKEN", None),
            ("GITHON_API_BASE_URL", None),
            ("GITHON_TIMEOUT_SECONDS", None),
        ],
        &[],
    );

    assert_eq!(config.api_base_url, "https://api.github.com");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.token.is_none(), "token should be unset");
}

#[rstest]
fn loads_values_from_environment() {
    let config = load_isolated(
        &[
            ("GITHON_TOKEN", Some("env-token")),
            ("GITHON_API_BASE_URL", Some("http://127.0.0.1:9999")),
            ("GITHON_TIMEOUT_SECONDS", Some("7")),
        ],
        &[],
    );

    assert_eq!(config.token.as_deref(), Some("env-token"));
    assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    assert_eq!(config.timeout_seconds, 7);
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_isolated(
        &[
            ("GITHON_TOKEN", Some("env-token")),
            ("GITHON_TIMEOUT_SECONDS", Some("7")),
        ],
        &["--token", "cli-token", "--timeout-seconds", "3"],
    );

    assert_eq!(config.token.as_deref(), Some("cli-token"));
    assert_eq!(config.timeout_seconds, 3);
}

#[rstest]
fn short_token_flag_is_supported() {
    let config = load_isolated(&[("GITHON_TOKEN", None)], &["-t", "short-token"]);

    assert_eq!(config.token.as_deref(), Some("short-token"));
}
