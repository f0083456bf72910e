//! Newtype identifiers for workflow-run metadata.
//!
//! Every integer the platform hands us through the environment is wrapped in a
//! distinct newtype. This prevents accidentally interchanging, for example, a
//! [`RunId`] with a [`RunNumber`] even though both are `u64` under the hood.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (platform-assigned integers).
// Generates: struct (Copy), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! u64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

u64_id! {
    /// Unique identifier of a workflow run (`GITHUB_RUN_ID`).
    RunId
}

u64_id! {
    /// Per-workflow sequential run counter (`GITHUB_RUN_NUMBER`).
    ///
    /// Does not change when a run is re-run.
    RunNumber
}

u64_id! {
    /// Issue or pull request number within a repository.
    ///
    /// Zero means the triggering event did not reference an issue or pull
    /// request.
    IssueNumber
}
