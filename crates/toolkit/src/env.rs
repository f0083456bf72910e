//! Environment lookup abstraction.
//!
//! Everything the toolkit reads from the runner (inputs, command-file paths,
//! run metadata) goes through [`EnvSource`], so configuration parsing can be
//! exercised with an in-memory map instead of the process environment.

use std::collections::HashMap;

/// A read-only view of environment variables.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` when it is unset or not valid
    /// Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, or `default` when it is unset.
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
