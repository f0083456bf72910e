//! Pull request operations.

use octocrab::models::pulls::PullRequest;

use super::ListOptions;
use crate::{GitHub, GitHubError, Paginated};

/// Pull request operations.
#[derive(Debug, Clone, Copy)]
pub struct PullsApi<'a> {
    client: &'a GitHub,
}

impl<'a> PullsApi<'a> {
    pub(crate) fn new(client: &'a GitHub) -> Self {
        Self { client }
    }

    /// Lists pull requests in a repository.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Paginated<PullRequest>, GitHubError> {
        let route = options.route(&format!("/repos/{owner}/{repo}/pulls"));
        let page = self.client.get_json("pulls.list", &route).await?;
        Ok(Paginated::Collection(page))
    }

    /// Fetches one pull request by number.
    pub async fn get(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<PullRequest, GitHubError> {
        self.client
            .get_json(
                "pulls.get",
                &format!("/repos/{owner}/{repo}/pulls/{pull_number}"),
            )
            .await
    }
}
