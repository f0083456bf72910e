//! Workflow run operations.

use octocrab::models::workflows::Run;

use super::ListOptions;
use crate::{GitHub, GitHubError, Paginated};

/// Workflow run operations.
#[derive(Debug, Clone, Copy)]
pub struct ActionsApi<'a> {
    client: &'a GitHub,
}

impl<'a> ActionsApi<'a> {
    pub(crate) fn new(client: &'a GitHub) -> Self {
        Self { client }
    }

    /// Lists workflow runs across all workflows of a repository.
    ///
    /// `options.state` does not apply to runs and is ignored.
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Paginated<Run>, GitHubError> {
        let options = ListOptions {
            state: None,
            ..options
        };
        let route = options.route(&format!("/repos/{owner}/{repo}/actions/runs"));
        let page = self
            .client
            .get_json("actions.list_workflow_runs", &route)
            .await?;
        Ok(Paginated::Collection(page))
    }

    /// Fetches one workflow run by id.
    pub async fn get_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Run, GitHubError> {
        self.client
            .get_json(
                "actions.get_workflow_run",
                &format!("/repos/{owner}/{repo}/actions/runs/{run_id}"),
            )
            .await
    }
}
