//! Workflow toolkit for github-script.
//!
//! This crate contains everything a script needs to know about the workflow
//! run it executes in, and everything it needs to talk back to the runner.
//! It never touches the network; the API client lives in the `github` crate.
//!
//! ## Architectural Layer
//!
//! **Environment + runner protocol.** Reads the process environment (through
//! [`EnvSource`]) and writes the runner's stdout command protocol and command
//! files.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`env`] | [`EnvSource`] lookup abstraction and the process implementation |
//! | [`facade`] | [`Core`]: log annotations, outputs, exports, secrets, inputs |
//! | [`context`] | [`ExecutionContext`]: event payload and run metadata |
//! | [`identifiers`] | Newtype integers (`RunId`, `RunNumber`, `IssueNumber`) |
//! | [`types`] | Composite values (`RepoRef`, `IssueRef`) |
//! | [`errors`] | [`ToolkitError`] and [`RetryPolicy`] |

pub mod context;
pub mod env;
pub mod errors;
pub mod facade;
pub mod identifiers;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use context::{ExecutionContext, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL, DEFAULT_SERVER_URL};
pub use env::{EnvSource, ProcessEnv};
pub use errors::{RetryPolicy, ToolkitError};
pub use facade::Core;
pub use identifiers::{IssueNumber, RunId, RunNumber};
pub use types::{IssueRef, RepoRef};
