//! The script capability boundary.
//!
//! A script is any value implementing [`Script`]: it receives a [`Scope`]
//! holding the API client, the execution context, and the command facade, and
//! returns an optional JSON result. There is no shared mutable namespace; the
//! scope is built fresh for each run and dropped when the script returns.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use github::GitHub;
use serde_json::Value;
use toolkit::{Core, EnvSource, ExecutionContext};

/// What a script hands back: `Some` value, or `None` when it produced nothing.
pub type ScriptResult = Option<Value>;

/// Capabilities available to a running script.
#[derive(Debug, Clone)]
pub struct Scope {
    /// REST/GraphQL client.
    pub github: Arc<GitHub>,
    /// Snapshot of the workflow run.
    pub context: Arc<ExecutionContext>,
    /// Log annotations, outputs, exports, and inputs.
    pub core: Arc<Core>,
}

impl Scope {
    /// The environment the run was configured from.
    pub fn env(&self) -> &dyn EnvSource {
        self.core.env().as_ref()
    }
}

/// A user-supplied script.
///
/// Implemented for every `Fn(Scope) -> impl Future<Output =
/// anyhow::Result<ScriptResult>>`, so closures work directly:
///
/// ```ignore
/// let script = |scope: Scope| async move {
///     let issue = scope.context.issue().clone();
///     scope.core.info(format!("triaging {issue}"));
///     anyhow::Ok(Some(serde_json::json!(issue.number)))
/// };
/// ```
#[async_trait]
pub trait Script: Send + Sync {
    async fn run(&self, scope: Scope) -> anyhow::Result<ScriptResult>;
}

#[async_trait]
impl<F, Fut> Script for F
where
    F: Fn(Scope) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<ScriptResult>> + Send + 'static,
{
    async fn run(&self, scope: Scope) -> anyhow::Result<ScriptResult> {
        (self)(scope).await
    }
}

/// Runs `script` against the given capabilities and returns its result.
///
/// Script errors are returned exactly as the script produced them. No timeout,
/// sandbox, or resource limit is applied.
#[tracing::instrument(
    name = "run_script",
    skip_all,
    fields(repo = %context.repo(), event = context.event_name())
)]
pub async fn run_script<S>(
    script: &S,
    github: Arc<GitHub>,
    context: Arc<ExecutionContext>,
    core: Arc<Core>,
) -> anyhow::Result<ScriptResult>
where
    S: Script + ?Sized,
{
    let scope = Scope {
        github,
        context,
        core,
    };
    let result = script.run(scope).await?;
    tracing::debug!(has_result = result.is_some(), "script finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::capabilities;

    #[derive(Debug, thiserror::Error)]
    #[error("script exploded")]
    struct Exploded;

    #[tokio::test]
    async fn returns_value_the_script_produced() {
        let (github, context, core, _) = capabilities(&[]);
        let script = |_scope: Scope| async move { anyhow::Ok(Some(json!(1 + 1))) };

        let result = run_script(&script, github, context, core).await.unwrap();
        assert_eq!(result, Some(json!(2)));
    }

    #[tokio::test]
    async fn returns_none_when_script_sets_nothing() {
        let (github, context, core, _) = capabilities(&[]);
        let script = |scope: Scope| async move {
            scope.core.info("nothing to report");
            anyhow::Ok(None::<Value>)
        };

        let result = run_script(&script, github, context, core).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn script_error_propagates_unchanged() {
        let (github, context, core, _) = capabilities(&[]);
        let script =
            |_scope: Scope| async move { Err::<ScriptResult, _>(anyhow::Error::new(Exploded)) };

        let err = run_script(&script, github, context, core).await.unwrap_err();
        assert!(err.downcast_ref::<Exploded>().is_some());
    }

    #[tokio::test]
    async fn scope_exposes_context_core_and_env() {
        let (github, context, core, out) = capabilities(&[
            ("GITHUB_REPOSITORY", "octocat/hello-world"),
            ("GITHUB_ACTOR", "monalisa"),
            ("INPUT_GREETING", "hi"),
        ]);
        let script = |scope: Scope| async move {
            let greeting = scope.core.get_input("greeting", true)?;
            scope.core.warning(format!("{greeting} {}", scope.context.actor()));
            anyhow::Ok(Some(json!({
                "repo": scope.context.repo().to_string(),
                "actor_env": scope.env().var("GITHUB_ACTOR"),
                "base_url": scope.github.base_url(),
            })))
        };

        let result = run_script(&script, github, context, core).await.unwrap();
        assert_eq!(
            result,
            Some(json!({
                "repo": "octocat/hello-world",
                "actor_env": "monalisa",
                "base_url": "https://api.github.com",
            }))
        );
        assert_eq!(out.contents(), "::warning::hi monalisa\n");
    }

    struct Counter;

    #[async_trait]
    impl Script for Counter {
        async fn run(&self, scope: Scope) -> anyhow::Result<ScriptResult> {
            Ok(Some(json!(scope.context.run_number().as_u64() + 1)))
        }
    }

    #[tokio::test]
    async fn trait_objects_are_scripts() {
        let (github, context, core, _) = capabilities(&[("GITHUB_RUN_NUMBER", "41")]);
        let script: Box<dyn Script> = Box::new(Counter);

        let result = run_script(script.as_ref(), github, context, core)
            .await
            .unwrap();
        assert_eq!(result, Some(json!(42)));
    }
}
