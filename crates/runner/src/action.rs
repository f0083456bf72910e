//! Action entry point: inputs in, `result` output out.
//!
//! [`run`] is what a workflow step binary calls. It reads the action inputs,
//! builds the execution context and API client, runs the script, and writes
//! the encoded result to the `result` step output. Any failure is reported
//! with [`Core::set_failed`], which ends the process with status 1.

use std::sync::Arc;

use github::{GitHub, GitHubConfig, RetrySettings};
use toolkit::{Core, ExecutionContext};

use crate::{run_script, ActionError, ResultEncoding, Script};

/// Action inputs that configure a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionInputs {
    /// `github-token`; empty means unauthenticated.
    pub token: Option<String>,
    /// `base-url`; empty means the context's API URL.
    pub base_url: Option<String>,
    /// `retries`; zero disables retries.
    pub retries: u32,
    /// `retry-exempt-status-codes`, comma separated; empty keeps the default
    /// exempt set.
    pub retry_exempt_status_codes: Option<Vec<u16>>,
    /// `result-encoding`.
    pub result_encoding: ResultEncoding,
}

impl ActionInputs {
    /// Reads and validates every input through `core`.
    pub fn from_core(core: &Core) -> Result<Self, ActionError> {
        Ok(Self {
            token: non_empty(core.get_input("github-token", false)?),
            base_url: non_empty(core.get_input("base-url", false)?),
            retries: parse_retries(&core.get_input("retries", false)?)?,
            retry_exempt_status_codes: parse_status_codes(
                &core.get_input("retry-exempt-status-codes", false)?,
            )?,
            result_encoding: core.get_input("result-encoding", false)?.parse()?,
        })
    }

    /// Client configuration for these inputs, falling back to the context's
    /// API URL when no base URL was given.
    pub fn github_config(&self, context: &ExecutionContext) -> GitHubConfig {
        GitHubConfig {
            token: self.token.clone(),
            base_url: Some(
                self.base_url
                    .clone()
                    .unwrap_or_else(|| context.api_url().to_string()),
            ),
            retry: RetrySettings::new(self.retries, self.retry_exempt_status_codes.clone()),
        }
    }
}

/// Runs `script` with everything configured from `core`'s environment and
/// writes the `result` output.
pub async fn execute<S>(script: &S, core: Arc<Core>) -> anyhow::Result<()>
where
    S: Script + ?Sized,
{
    let inputs = ActionInputs::from_core(&core)?;
    let context = Arc::new(ExecutionContext::from_source(core.env().as_ref())?);
    let github = Arc::new(GitHub::new(inputs.github_config(&context))?);

    let result = run_script(script, github, context, Arc::clone(&core)).await?;
    core.set_output("result", inputs.result_encoding.encode(&result))?;
    Ok(())
}

/// [`execute`] against the process environment; failures end the process
/// through [`Core::set_failed`].
pub async fn run<S>(script: &S)
where
    S: Script + ?Sized,
{
    let core = Arc::new(Core::new());
    if let Err(err) = execute(script, Arc::clone(&core)).await {
        tracing::error!(error = ?err, "script run failed");
        core.set_failed(format_args!("Unhandled error: {err:#}"));
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn parse_retries(raw: &str) -> Result<u32, ActionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| ActionError::InvalidInput {
        name: "retries",
        reason: format!("expected a non-negative integer, got '{raw}'"),
    })
}

fn parse_status_codes(raw: &str) -> Result<Option<Vec<u16>>, ActionError> {
    let codes = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse().map_err(|_| ActionError::InvalidInput {
                name: "retry-exempt-status-codes",
                reason: format!("'{code}' is not a status code"),
            })
        })
        .collect::<Result<Vec<u16>, _>>()?;
    Ok((!codes.is_empty()).then_some(codes))
}
