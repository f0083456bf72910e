//! github-script runner.
//!
//! Binds a user script to the three capabilities it may use (the API client,
//! the execution context, and the command facade) and runs it once.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The runner sequences configuration, client
//! construction, script execution, and result output. It contains no GitHub
//! or runner-protocol logic of its own; those live in the `github` and
//! `toolkit` crates.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | `script` | [`Script`] trait, [`Scope`], [`run_script`] |
//! | [`action`] | [`ActionInputs`] and the `run`/`execute` entry points |
//! | [`encoding`] | [`ResultEncoding`] for the `result` output |
//! | [`errors`] | [`ActionError`] |

pub mod action;
pub mod encoding;
pub mod errors;
mod script;

#[cfg(test)]
mod test_support;

pub use action::ActionInputs;
pub use encoding::ResultEncoding;
pub use errors::ActionError;
pub use script::{run_script, Script, ScriptResult, Scope};

// Scripts build their results with `serde_json::json!` and receive these
// crates' types through `Scope`.
pub use github;
pub use serde_json;
pub use toolkit;
