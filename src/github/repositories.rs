//! Repository endpoints and the multi-resource aggregate.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use super::classifier::ResponseOutcome;
use super::client::{CallOptions, GithubClient};
use super::error::GithubError;
use super::locator::RepositoryLocator;
use super::transport::HttpTransport;

/// Sub-resources exposed under a repository endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RepositoryResource {
    /// `branches`
    Branches,
    /// `comments`
    Comments,
    /// `commits`
    Commits,
    /// `contents`
    Contents,
    /// `contributors`
    Contributors,
    /// `events`
    Events,
    /// `issues`
    Issues,
    /// `labels`
    Labels,
    /// `languages`
    Languages,
    /// `pulls`
    Pulls,
    /// `subscribers`
    Subscribers,
    /// `tags`
    Tags,
}

impl RepositoryResource {
    /// Every sub-resource, in the order the aggregate fetches them.
    pub const ALL: [Self; 12] = [
        Self::Branches,
        Self::Comments,
        Self::Commits,
        Self::Contents,
        Self::Contributors,
        Self::Events,
        Self::Issues,
        Self::Labels,
        Self::Languages,
        Self::Pulls,
        Self::Subscribers,
        Self::Tags,
    ];

    /// Path segment and aggregate key for the sub-resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Branches => "branches",
            Self::Comments => "comments",
            Self::Commits => "commits",
            Self::Contents => "contents",
            Self::Contributors => "contributors",
            Self::Events => "events",
            Self::Issues => "issues",
            Self::Labels => "labels",
            Self::Languages => "languages",
            Self::Pulls => "pulls",
            Self::Subscribers => "subscribers",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for RepositoryResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payloads for every [`RepositoryResource`] of one repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryAggregate {
    resources: BTreeMap<RepositoryResource, Value>,
}

impl RepositoryAggregate {
    /// Payload fetched for `resource`.
    #[must_use]
    pub fn get(&self, resource: RepositoryResource) -> Option<&Value> {
        self.resources.get(&resource)
    }

    /// Number of sub-resources held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true when nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterates sub-resources in key order.
    pub fn iter(&self) -> impl Iterator<Item = (RepositoryResource, &Value)> {
        self.resources.iter().map(|(resource, value)| (*resource, value))
    }

    /// Converts to a JSON object keyed by sub-resource name.
    #[must_use]
    pub fn into_json(self) -> Value {
        let object: Map<String, Value> = self
            .resources
            .into_iter()
            .map(|(resource, value)| (resource.as_str().to_owned(), value))
            .collect();
        Value::Object(object)
    }
}

impl<T: HttpTransport> GithubClient<T> {
    /// Fetches repository metadata.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::RepositoryIdNotFound`] or
    /// [`GithubError::RepositoryNameNotFound`] when the repository does not
    /// exist, or any other dispatch error.
    pub fn repository(
        &self,
        locator: &RepositoryLocator,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.dispatch(&locator.endpoint(None), &[], options)
    }

    /// Fetches a single repository sub-resource.
    ///
    /// # Errors
    ///
    /// Same as [`GithubClient::repository`].
    pub fn repository_resource(
        &self,
        locator: &RepositoryLocator,
        resource: RepositoryResource,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.dispatch(&locator.endpoint(Some(resource.as_str())), &[], options)
    }

    /// Fetches every sub-resource of a repository, one request each.
    ///
    /// Requests are unconditional. The first failing request aborts the
    /// aggregate and its error is returned; nothing fetched so far is kept.
    ///
    /// # Errors
    ///
    /// Same as [`GithubClient::repository`].
    pub fn repository_aggregate(
        &self,
        locator: &RepositoryLocator,
        options: &CallOptions,
    ) -> Result<RepositoryAggregate, GithubError> {
        let unconditional = options.unconditional();
        let mut resources = BTreeMap::new();

        for resource in RepositoryResource::ALL {
            let payload = self
                .repository_resource(locator, resource, &unconditional)?
                .into_payload()
                .unwrap_or(Value::Null);
            resources.insert(resource, payload);
        }

        tracing::debug!("aggregated {} resources for {locator}", resources.len());
        Ok(RepositoryAggregate { resources })
    }

    /// `GET /repositories/{id}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository`].
    pub fn repository_by_id(
        &self,
        repository_id: u64,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.repository(&RepositoryLocator::Id(repository_id), options)
    }

    /// `GET /repos/{owner}/{name}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository`].
    pub fn repository_by_name(
        &self,
        owner: &str,
        repository: &str,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.repository(
            &RepositoryLocator::from_owner_repo(owner, repository),
            options,
        )
    }

    /// `GET /repositories/{id}/{resource}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository`].
    pub fn repository_resource_by_id(
        &self,
        repository_id: u64,
        resource: RepositoryResource,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.repository_resource(&RepositoryLocator::Id(repository_id), resource, options)
    }

    /// `GET /repos/{owner}/{name}/{resource}`.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository`].
    pub fn repository_resource_by_name(
        &self,
        owner: &str,
        repository: &str,
        resource: RepositoryResource,
        options: &CallOptions,
    ) -> Result<ResponseOutcome, GithubError> {
        self.repository_resource(
            &RepositoryLocator::from_owner_repo(owner, repository),
            resource,
            options,
        )
    }

    /// Aggregate of every sub-resource for a repository addressed by id.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository_aggregate`].
    pub fn repository_aggregate_by_id(
        &self,
        repository_id: u64,
        options: &CallOptions,
    ) -> Result<RepositoryAggregate, GithubError> {
        self.repository_aggregate(&RepositoryLocator::Id(repository_id), options)
    }

    /// Aggregate of every sub-resource for a repository addressed by name.
    ///
    /// # Errors
    ///
    /// See [`GithubClient::repository_aggregate`].
    pub fn repository_aggregate_by_name(
        &self,
        owner: &str,
        repository: &str,
        options: &CallOptions,
    ) -> Result<RepositoryAggregate, GithubError> {
        self.repository_aggregate(
            &RepositoryLocator::from_owner_repo(owner, repository),
            options,
        )
    }
}
