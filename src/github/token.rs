//! Access token wrapper and per-call credential resolution.
//!
//! GitHub accepts the credential as an `access_token` query parameter. A call
//! can supply its own token; otherwise the client-level default applies, and
//! without either the request is sent unauthenticated.

use std::fmt;

/// Access token wrapper enforcing a non-blank value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Trims whitespace and returns `None` when nothing remains.
    ///
    /// # Example
    ///
    /// ```
    /// use githon::github::AccessToken;
    ///
    /// assert!(AccessToken::parse("  ").is_none());
    /// assert_eq!(
    ///     AccessToken::parse(" abc ").map(|token| token.value().to_owned()),
    ///     Some("abc".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn parse(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(****)")
    }
}

/// Picks the credential for a single call.
///
/// The call-level token wins whenever it is present, regardless of the
/// default.
#[must_use]
pub fn resolve<'token>(
    call_token: Option<&'token AccessToken>,
    default_token: Option<&'token AccessToken>,
) -> Option<&'token AccessToken> {
    call_token.or(default_token)
}

/// Holds the client-level default credential.
///
/// The default is fixed at construction; resolution never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResolver {
    default_token: Option<AccessToken>,
}

impl TokenResolver {
    /// Creates a resolver with an optional default token.
    #[must_use]
    pub const fn new(default_token: Option<AccessToken>) -> Self {
        Self { default_token }
    }

    /// Returns the client-level default token, if any.
    #[must_use]
    pub const fn default_token(&self) -> Option<&AccessToken> {
        self.default_token.as_ref()
    }

    /// Resolves the active credential for a call.
    #[must_use]
    pub fn resolve<'token>(
        &'token self,
        call_token: Option<&'token AccessToken>,
    ) -> Option<&'token AccessToken> {
        resolve(call_token, self.default_token.as_ref())
    }
}
