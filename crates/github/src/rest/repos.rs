//! Repository operations.

use octocrab::models::repos::RepoCommit;
use octocrab::models::Repository;

use crate::{GitHub, GitHubError};

/// Repository and commit operations.
#[derive(Debug, Clone, Copy)]
pub struct ReposApi<'a> {
    client: &'a GitHub,
}

impl<'a> ReposApi<'a> {
    pub(crate) fn new(client: &'a GitHub) -> Self {
        Self { client }
    }

    /// Fetches `owner/repo`; same as [`GitHub::get_repo`].
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        self.client.get_repo(owner, repo).await
    }

    /// Fetches a commit by SHA, branch, or tag name.
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<RepoCommit, GitHubError> {
        self.client
            .get_json(
                "repos.get_commit",
                &format!("/repos/{owner}/{repo}/commits/{reference}"),
            )
            .await
    }
}
