//! github-script entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Wire observability**: install a `tracing-subscriber` writing to
//!    stderr, filtered by `RUST_LOG` (default `warn`). Setting
//!    `GITHUB_SCRIPT_LOG_FORMAT=json` switches to JSON lines. Stdout is left
//!    to the runner's command protocol.
//! 2. **Run the script**: hand the built-in context report to
//!    [`runner::action::run`], which reads the action inputs, builds the
//!    context and API client, and writes the `result` output. Failures end
//!    the process with status 1 and an `::error::` line.
//!
//! The binary runs only the compiled-in context report; it does not load
//! user scripts. To run your own script, write a binary that implements
//! [`runner::Script`] (or passes an async closure) and calls
//! [`runner::action::run`] the same way `main` does here.

use runner::{Scope, ScriptResult};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_VAR: &str = "GITHUB_SCRIPT_LOG_FORMAT";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "github-script starting");
    runner::action::run(&report_context).await;
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Logs a summary of the workflow run and returns it as the step result.
async fn report_context(scope: Scope) -> anyhow::Result<ScriptResult> {
    let context = &scope.context;
    let issue = context.issue();

    scope.core.start_group("Workflow context");
    scope.core.info(format_args!("repository: {}", context.repo()));
    scope.core.info(format_args!("event: {}", context.event_name()));
    scope.core.info(format_args!("actor: {}", context.actor()));
    scope.core.info(format_args!("run: {} (#{})", context.run_id(), context.run_number()));
    if issue.number.as_u64() != 0 {
        scope.core.info(format_args!("issue: {issue}"));
    }
    scope.core.end_group();

    Ok(Some(json!({
        "repository": context.repo().to_string(),
        "event": context.event_name(),
        "ref": context.git_ref(),
        "sha": context.sha(),
        "actor": context.actor(),
        "run_id": context.run_id(),
        "run_number": context.run_number(),
        "issue": issue.number,
    })))
}
