//! Tests for `resolve_default_token`.

use rstest::rstest;

use crate::GithonConfig;

#[rstest]
fn configured_token_wins_over_environment() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = GithonConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_default_token(),
        Some("my-token".to_owned()),
        "configured token should take precedence"
    );
}

#[rstest]
fn falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = GithonConfig::default();

    assert_eq!(
        config.resolve_default_token(),
        Some("legacy-token".to_owned()),
        "GITHUB_TOKEN should be used when nothing is configured"
    );
}

#[rstest]
fn blank_configured_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = GithonConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_default_token(),
        Some("legacy-token".to_owned())
    );
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some(""))]
fn no_token_means_unauthenticated(#[case] github_token: Option<&str>) {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", github_token)]);
    let config = GithonConfig::default();

    assert_eq!(
        config.resolve_default_token(),
        None,
        "no usable token should resolve to None"
    );
}
