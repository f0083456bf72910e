//! Shared value types derived from the workflow environment.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types group
//! several values that only make sense together: a repository is an owner plus
//! a name, an issue is a repository plus a number.

use serde::{Deserialize, Serialize};

use crate::{IssueNumber, ToolkitError};

// ---------------------------------------------------------------------------
// Repository identity
// ---------------------------------------------------------------------------

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Account or organisation that owns the repository.
    pub owner: String,
    /// Repository name without the owner prefix.
    pub repo: String,
}

impl RepoRef {
    /// Creates a [`RepoRef`] from its parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses an `"owner/name"` string, splitting once on the first `/`.
    ///
    /// Everything after the first separator belongs to the name. Empty parts
    /// are accepted; only a string with no separator at all is rejected.
    pub fn parse(value: &str) -> Result<Self, ToolkitError> {
        match value.split_once('/') {
            Some((owner, repo)) => Ok(Self::new(owner, repo)),
            None => Err(ToolkitError::MalformedRepository {
                value: value.to_string(),
            }),
        }
    }

    /// Returns `true` when either part is empty.
    pub fn is_incomplete(&self) -> bool {
        self.owner.is_empty() || self.repo.is_empty()
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// ---------------------------------------------------------------------------
// Issue / pull request identity
// ---------------------------------------------------------------------------

/// The issue or pull request the triggering event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Issue or pull request number; zero when the event carries none.
    pub number: IssueNumber,
}

impl IssueRef {
    /// Creates an [`IssueRef`] in `repo`.
    pub fn new(repo: &RepoRef, number: IssueNumber) -> Self {
        Self {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            number,
        }
    }
}

impl std::fmt::Display for IssueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
