//! User profile and per-user collection endpoints.

use super::classifier::ResponseOutcome;
use super::client::{CallOptions, GithubClient};
use super::error::GithubError;
use super::locator::{Endpoint, LookupContext, UserLocator};
use super::token::AccessToken;
use super::transport::HttpTransport;

/// Lists GitHub keeps for every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserCollection {
    /// Accounts following the user.
    Followers,
    /// Accounts the user follows.
    Following,
    /// The user's public gists.
    Gists,
    /// The user's public repositories.
    Repositories,
}

impl UserCollection {
    /// Path segment appended to the user endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
            Self::Gists => "gists",
            Self::Repositories => "repos",
        }
    }
}

impl<T: HttpTransport> GithubClient<T> {
    /// Fetches a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::UserIdNotFound`] or
    /// [`GithubError::UsernameNotFound`] when the user does not exist, or any
    /// other dispatch error.
    pub fn user(
        &self,
        locator: &UserLocator,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.dispatch(&locator.endpoint(None), &[], options)
    }

    /// Fetches one of a user's collections.
    ///
    /// # Errors
    ///
    /// Same as [`GithubClient::user`].
    pub fn user_collection(
        &self,
        locator: &UserLocator,
        collection: UserCollection,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.dispatch(&locator.endpoint(Some(collection.as_str())), &[], options)
    }

    /// `GET /user/{id}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn user_by_id(
        &self,
        user_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user(&UserLocator::Id(user_id), options)
    }

    /// `GET /users/{login}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn user_by_username(
        &self,
        username: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user(&UserLocator::from(username), options)
    }

    /// `GET /user/{id}/followers`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn followers_by_id(
        &self,
        user_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(&UserLocator::Id(user_id), UserCollection::Followers, options)
    }

    /// `GET /users/{login}/followers`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn followers_by_username(
        &self,
        username: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(
            &UserLocator::from(username),
            UserCollection::Followers,
            options,
        )
    }

    /// `GET /user/{id}/following`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn following_by_id(
        &self,
        user_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(&UserLocator::Id(user_id), UserCollection::Following, options)
    }

    /// `GET /users/{login}/following`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn following_by_username(
        &self,
        username: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(
            &UserLocator::from(username),
            UserCollection::Following,
            options,
        )
    }

    /// `GET /user/{id}/gists`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn gists_by_id(
        &self,
        user_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(&UserLocator::Id(user_id), UserCollection::Gists, options)
    }

    /// `GET /users/{login}/gists`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn gists_by_username(
        &self,
        username: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(&UserLocator::from(username), UserCollection::Gists, options)
    }

    /// `GET /user/{id}/repos`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn repositories_by_user_id(
        &self,
        user_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(
            &UserLocator::Id(user_id),
            UserCollection::Repositories,
            options,
        )
    }

    /// `GET /users/{login}/repos`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::user`].
    pub fn repositories_by_username(
        &self,
        username: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.user_collection(
            &UserLocator::from(username),
            UserCollection::Repositories,
            options,
        )
    }

    /// `GET /user/emails` for the account that owns `token`.
    ///
    /// `token` always wins over any token in `options`; only the conditional
    /// timestamp is taken from there.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidCredential`] when the token is rejected
    /// or lacks the `user:email` scope, or any other dispatch error.
    pub fn user_emails(
        &self,
        token: &AccessToken,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        let endpoint = Endpoint::new("user/emails", Vec::new(), LookupContext::AuthenticatedUser);
        let call = options.clone().with_token(token.clone());

        self.dispatch(&endpoint, &[], &call)
    }
}
