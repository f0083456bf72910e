//! Snapshot of the workflow run that invoked the script.
//!
//! [`ExecutionContext`] is read once from the environment and never changes
//! afterwards. The event payload is parsed eagerly, and the derived
//! repository and issue views are computed during construction, so every
//! accessor is a plain field read.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::env::{EnvSource, ProcessEnv};
use crate::{IssueNumber, IssueRef, RepoRef, RunId, RunNumber, ToolkitError};

/// Default REST API root of the public platform.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default web root of the public platform.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";
/// Default GraphQL endpoint of the public platform.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Immutable description of the current workflow run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionContext {
    payload: Value,
    event_name: String,
    sha: String,
    #[serde(rename = "ref")]
    git_ref: String,
    workflow: String,
    action: String,
    actor: String,
    job: String,
    run_number: RunNumber,
    run_id: RunId,
    api_url: String,
    server_url: String,
    graphql_url: String,
    repo: RepoRef,
    issue: IssueRef,
}

impl ExecutionContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Result<Self, ToolkitError> {
        Self::from_source(&ProcessEnv)
    }

    /// Reads the context from `env`.
    ///
    /// # Errors
    ///
    /// - [`ToolkitError::Io`] / [`ToolkitError::EventPayload`] when
    ///   `GITHUB_EVENT_PATH` names an existing file that cannot be read or
    ///   parsed.
    /// - [`ToolkitError::InvalidNumber`] when the run number or id is not an
    ///   unsigned integer.
    /// - [`ToolkitError::MalformedRepository`] when `GITHUB_REPOSITORY` is set
    ///   but contains no `/`.
    pub fn from_source(env: &dyn EnvSource) -> Result<Self, ToolkitError> {
        let payload = load_payload(env.var("GITHUB_EVENT_PATH").as_deref())?;

        let repository = env.var_or("GITHUB_REPOSITORY", "/");
        let repo = RepoRef::parse(&repository)?;
        if repo.is_incomplete() {
            tracing::warn!(
                repository = %repository,
                "GITHUB_REPOSITORY is missing or incomplete; owner/name will be empty"
            );
        }
        let issue = IssueRef::new(&repo, issue_number(&payload));

        Ok(Self {
            event_name: env.var_or("GITHUB_EVENT_NAME", ""),
            sha: env.var_or("GITHUB_SHA", ""),
            git_ref: env.var_or("GITHUB_REF", ""),
            workflow: env.var_or("GITHUB_WORKFLOW", ""),
            action: env.var_or("GITHUB_ACTION", ""),
            actor: env.var_or("GITHUB_ACTOR", ""),
            job: env.var_or("GITHUB_JOB", ""),
            run_number: RunNumber::new(parse_u64(env, "GITHUB_RUN_NUMBER")?),
            run_id: RunId::new(parse_u64(env, "GITHUB_RUN_ID")?),
            api_url: env.var_or("GITHUB_API_URL", DEFAULT_API_URL),
            server_url: env.var_or("GITHUB_SERVER_URL", DEFAULT_SERVER_URL),
            graphql_url: env.var_or("GITHUB_GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
            payload,
            repo,
            issue,
        })
    }

    /// The webhook payload of the triggering event; an empty object when no
    /// payload file was available.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Name of the triggering event (`GITHUB_EVENT_NAME`).
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Commit SHA that triggered the run (`GITHUB_SHA`).
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// The fully-formed git ref that triggered the run (`GITHUB_REF`).
    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    /// Name of the running workflow (`GITHUB_WORKFLOW`).
    pub fn workflow(&self) -> &str {
        &self.workflow
    }

    /// Identifier of the running step (`GITHUB_ACTION`).
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Login of the user or app that started the run (`GITHUB_ACTOR`).
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Identifier of the current job (`GITHUB_JOB`).
    pub fn job(&self) -> &str {
        &self.job
    }

    /// Per-workflow run counter (`GITHUB_RUN_NUMBER`), zero when unset.
    pub fn run_number(&self) -> RunNumber {
        self.run_number
    }

    /// Repository-unique run id (`GITHUB_RUN_ID`), zero when unset.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// REST API root (`GITHUB_API_URL`).
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Web root of the platform (`GITHUB_SERVER_URL`).
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// GraphQL endpoint (`GITHUB_GRAPHQL_URL`).
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Owner and name of the repository the workflow runs in.
    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// The issue or pull request the event refers to.
    ///
    /// The number is taken from `issue.number`, then `pull_request.number`,
    /// then the payload's top-level `number`, falling back to zero.
    pub fn issue(&self) -> &IssueRef {
        &self.issue
    }
}

fn load_payload(path: Option<&str>) -> Result<Value, ToolkitError> {
    let Some(path) = path.map(Path::new).filter(|p| p.exists()) else {
        return Ok(Value::Object(Map::new()));
    };

    let raw = std::fs::read_to_string(path).map_err(|source| ToolkitError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ToolkitError::EventPayload {
        path: PathBuf::from(path),
        source,
    })
}

fn issue_number(payload: &Value) -> IssueNumber {
    // Zero and non-integers fall through to the next candidate.
    let candidate = |pointer: &str| {
        payload
            .pointer(pointer)
            .and_then(Value::as_u64)
            .filter(|n| *n != 0)
    };

    let number = candidate("/issue/number")
        .or_else(|| candidate("/pull_request/number"))
        .or_else(|| candidate("/number"))
        .unwrap_or(0);
    IssueNumber::new(number)
}

fn parse_u64(env: &dyn EnvSource, variable: &'static str) -> Result<u64, ToolkitError> {
    let value = env.var_or(variable, "0");
    value
        .parse()
        .map_err(|_| ToolkitError::InvalidNumber { variable, value })
}
