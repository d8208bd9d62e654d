//! Resource identities and the endpoint descriptors derived from them.
//!
//! GitHub exposes two parallel path families for users and repositories: one
//! keyed by numeric identifier (`user/{id}`, `repositories/{id}`) and one
//! keyed by name (`users/{login}`, `repos/{owner}/{name}`). The locator picks
//! the family and records which identifiers were supplied, so a 404 can be
//! reported against the right resource.

use std::fmt;

use super::error::GithubError;

/// How an endpoint addresses its resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Path segment is a numeric identifier.
    ById,
    /// Path segment is a textual name.
    ByName,
    /// Free-text search; the query travels in the query string.
    Search,
    /// The credential itself identifies the resource.
    Credential,
}

/// Identifiers supplied by the caller, kept for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupContext {
    /// User addressed by numeric identifier.
    UserId(u64),
    /// User addressed by login.
    Username(String),
    /// Repository addressed by numeric identifier.
    RepositoryId(u64),
    /// Repository addressed by owner login and name.
    RepositoryName {
        /// Owner login.
        owner: String,
        /// Repository name.
        repository: String,
    },
    /// User search with the raw query string.
    Search {
        /// Query exactly as supplied by the caller.
        query: String,
    },
    /// Resource owned by whoever holds the credential.
    AuthenticatedUser,
    /// Quota report for the credential.
    RateLimit,
}

impl LookupContext {
    /// Returns how the endpoint addresses its resource.
    #[must_use]
    pub const fn kind(&self) -> LookupKind {
        match self {
            Self::UserId(_) | Self::RepositoryId(_) => LookupKind::ById,
            Self::Username(_) | Self::RepositoryName { .. } => LookupKind::ByName,
            Self::Search { .. } => LookupKind::Search,
            Self::AuthenticatedUser | Self::RateLimit => LookupKind::Credential,
        }
    }
}

/// A path template with positional `{}` placeholders, its parameters, and
/// the lookup context used to classify the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: String,
    path_params: Vec<String>,
    lookup: LookupContext,
}

impl Endpoint {
    /// Creates an endpoint descriptor.
    #[must_use]
    pub fn new(template: impl Into<String>, path_params: Vec<String>, lookup: LookupContext) -> Self {
        Self {
            template: template.into(),
            path_params,
            lookup,
        }
    }

    /// Path template, for example `users/{}/followers`.
    #[must_use]
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    /// Values substituted into the template, in order.
    #[must_use]
    pub fn path_params(&self) -> &[String] {
        &self.path_params
    }

    /// Identifiers used to pick the not-found error.
    #[must_use]
    pub const fn lookup(&self) -> &LookupContext {
        &self.lookup
    }

    /// Rejects name parameters that would retarget the request.
    ///
    /// Names are inserted into the path without encoding, so an empty
    /// value, a dot segment, or a path, query, or fragment delimiter would
    /// address a different resource. Numeric identifiers always pass.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidPathSegment`] naming the first
    /// offending parameter.
    pub fn check_path_params(&self) -> Result<(), GithubError> {
        if self.lookup.kind() != LookupKind::ByName {
            return Ok(());
        }

        self.path_params
            .iter()
            .find(|value| !is_plain_segment(value))
            .map_or(Ok(()), |value| {
                Err(GithubError::InvalidPathSegment {
                    value: value.clone(),
                })
            })
    }
}

fn is_plain_segment(value: &str) -> bool {
    !matches!(value, "" | "." | "..") && !value.contains(['/', '\\', '?', '#'])
}

/// A GitHub user addressed by numeric identifier or by login.
///
/// # Example
///
/// ```
/// use githon::github::UserLocator;
///
/// let by_id = UserLocator::from(583_231_u64);
/// let by_login = UserLocator::from("octocat");
/// assert_eq!(by_id.endpoint(Some("gists")).template(), "user/{}/gists");
/// assert_eq!(by_login.endpoint(None).template(), "users/{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLocator {
    /// Numeric user identifier.
    Id(u64),
    /// User login.
    Login(String),
}

impl UserLocator {
    /// Builds the endpoint for the user itself or one of its collections.
    #[must_use]
    pub fn endpoint(&self, collection: Option<&str>) -> Endpoint {
        let (base, param, lookup) = match self {
            Self::Id(id) => ("user/{}", id.to_string(), LookupContext::UserId(*id)),
            Self::Login(login) => (
                "users/{}",
                login.clone(),
                LookupContext::Username(login.clone()),
            ),
        };

        Endpoint::new(with_collection(base, collection), vec![param], lookup)
    }
}

impl From<u64> for UserLocator {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for UserLocator {
    fn from(value: &str) -> Self {
        Self::Login(value.to_owned())
    }
}

impl fmt::Display for UserLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "user #{id}"),
            Self::Login(login) => write!(f, "user {login}"),
        }
    }
}

/// A repository addressed by numeric identifier or by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryLocator {
    /// Numeric repository identifier.
    Id(u64),
    /// Owner login and repository name.
    Name {
        /// Owner login.
        owner: String,
        /// Repository name.
        repository: String,
    },
}

impl RepositoryLocator {
    /// Creates a name-based locator.
    #[must_use]
    pub fn from_owner_repo(owner: &str, repository: &str) -> Self {
        Self::Name {
            owner: owner.to_owned(),
            repository: repository.to_owned(),
        }
    }

    /// Builds the endpoint for the repository itself or one of its
    /// sub-resources.
    #[must_use]
    pub fn endpoint(&self, collection: Option<&str>) -> Endpoint {
        match self {
            Self::Id(id) => Endpoint::new(
                with_collection("repositories/{}", collection),
                vec![id.to_string()],
                LookupContext::RepositoryId(*id),
            ),
            Self::Name { owner, repository } => Endpoint::new(
                with_collection("repos/{}/{}", collection),
                vec![owner.clone(), repository.clone()],
                LookupContext::RepositoryName {
                    owner: owner.clone(),
                    repository: repository.clone(),
                },
            ),
        }
    }
}

impl From<u64> for RepositoryLocator {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "repository #{id}"),
            Self::Name { owner, repository } => write!(f, "{owner}/{repository}"),
        }
    }
}

fn with_collection(base: &str, collection: Option<&str>) -> String {
    collection.map_or_else(|| base.to_owned(), |name| format!("{base}/{name}"))
}
