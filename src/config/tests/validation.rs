//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::GithonConfig;
use crate::github::error::GithubError;

#[rstest]
fn default_configuration_is_valid() {
    assert_eq!(GithonConfig::default().validate(), Ok(()));
}

#[rstest]
#[case::relative_url(
    GithonConfig { api_base_url: "api.github.com".to_owned(), ..Default::default() }
)]
#[case::zero_timeout(GithonConfig { timeout_seconds: 0, ..Default::default() })]
#[case::blank_user_agent(GithonConfig { user_agent: "  ".to_owned(), ..Default::default() })]
fn rejects_unusable_values(#[case] config: GithonConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(GithubError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}
