//! Issue operations.

use octocrab::models::issues::{Comment, Issue};
use octocrab::models::Label;
use serde_json::json;

use super::ListOptions;
use crate::{GitHub, GitHubError, Paginated};

/// Issue operations, scoped per call to one repository.
#[derive(Debug, Clone, Copy)]
pub struct IssuesApi<'a> {
    client: &'a GitHub,
}

impl<'a> IssuesApi<'a> {
    pub(crate) fn new(client: &'a GitHub) -> Self {
        Self { client }
    }

    /// Posts a comment on an issue or pull request.
    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment, GitHubError> {
        self.client
            .post_json(
                "issues.create_comment",
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/comments"),
                &json!({ "body": body }),
            )
            .await
    }

    /// Adds labels to an issue, returning the issue's full label set.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>, GitHubError> {
        self.client
            .post_json(
                "issues.add_labels",
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/labels"),
                &json!({ "labels": labels }),
            )
            .await
    }

    /// Lists issues (and pull requests) in a repository.
    pub async fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Paginated<Issue>, GitHubError> {
        let route = options.route(&format!("/repos/{owner}/{repo}/issues"));
        let page = self.client.get_json("issues.list_for_repo", &route).await?;
        Ok(Paginated::Collection(page))
    }

    /// Fetches one issue by number.
    pub async fn get(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Issue, GitHubError> {
        self.client
            .get_json(
                "issues.get",
                &format!("/repos/{owner}/{repo}/issues/{issue_number}"),
            )
            .await
    }
}
