//! Errors raised while preparing a script run from action inputs.

use github::GitHubError;
use thiserror::Error;
use toolkit::ToolkitError;

/// Failures of the action entry point before or after the script itself.
///
/// Errors raised *by* the script are not wrapped; they travel as the
/// script's own `anyhow::Error`.
#[derive(Debug, Error)]
pub enum ActionError {
    /// An action input is present but unusable.
    #[error("Invalid input '{name}': {reason}")]
    InvalidInput {
        /// The input name as declared by the action.
        name: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}
