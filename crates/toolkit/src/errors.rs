//! Error and retry-policy types for the workflow toolkit.
//!
//! [`ToolkitError`] covers configuration problems detected while reading the
//! workflow environment: missing inputs, a malformed repository identifier, an
//! unreadable event payload, or a failed append to a command file.
//!
//! [`RetryPolicy`] is a cross-cutting concern: the API client crate decides,
//! per failed request, whether another attempt is allowed and expresses that
//! decision with this type.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether a failed request is safe to retry and, if so, after what delay.
///
/// ## Rules
///
/// - `Retryable`: the response status is in `[400, 600)`, is not in the
///   configured exempt set, and the retry budget is not yet spent.
/// - `NonRetryable`: everything else, including transport errors that never
///   produced a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt. `None` means retry
        /// immediately.
        after: Option<Duration>,
    },
    /// The operation must not be retried; the error is returned to the caller.
    NonRetryable,
}

impl RetryPolicy {
    /// Returns `true` for [`RetryPolicy::Retryable`].
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable { .. })
    }
}

// ---------------------------------------------------------------------------
// Toolkit errors
// ---------------------------------------------------------------------------

/// Errors raised while reading the workflow environment or writing command
/// files.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A required action input was absent or empty.
    #[error("Input required and not supplied: {name}")]
    InputRequired {
        /// The input name as the caller spelled it (before normalisation).
        name: String,
    },

    /// A boolean input held something other than a YAML 1.2 core boolean.
    #[error("Input does not meet YAML 1.2 \"Core Schema\" specification: {name} (got '{value}')")]
    InvalidBooleanInput {
        /// The input name.
        name: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The repository identifier has no `owner/name` separator.
    #[error("Malformed repository identifier '{value}': expected 'owner/name'")]
    MalformedRepository {
        /// The raw `GITHUB_REPOSITORY` value.
        value: String,
    },

    /// A numeric environment variable did not hold an unsigned integer.
    #[error("Environment variable {variable} is not a valid integer: '{value}'")]
    InvalidNumber {
        /// The variable name.
        variable: &'static str,
        /// The raw value.
        value: String,
    },

    /// The event payload file exists but is not valid JSON.
    #[error("Event payload at {} is not valid JSON", path.display())]
    EventPayload {
        /// Path taken from `GITHUB_EVENT_PATH`.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the event payload or appending to a command file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        /// The file being read or appended.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A multi-line record value contains its own block delimiter.
    #[error("Unexpected input: value for '{name}' must not contain the delimiter '{delimiter}'")]
    DelimiterCollision {
        /// The record key.
        name: String,
        /// The generated delimiter.
        delimiter: String,
    },
}
