//! github-script API client adapter.
//!
//! Wraps [`octocrab`] (REST) and [`reqwest`] (GraphQL) behind a single
//! [`GitHub`] handle that scripts receive. The surface is grouped by
//! resource, the way workflow scripts are used to calling it:
//!
//! ```text
//! github.get_repo(owner, repo)            github.issues().create_comment(..)
//! github.get_user(login)                  github.repos().get_commit(..)
//! github.graphql(query, variables)        github.pulls().list(..)
//! github.paginate(request)                github.actions().list_workflow_runs(..)
//! ```
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Transport, authentication, and page cursoring are
//! delegated to `octocrab` and `reqwest`. This crate adds only the status-code
//! [`RetrySettings`] and the explicit [`Paginated`] result shape. Errors from
//! the underlying clients are passed through untranslated inside
//! [`GitHubError`].

mod client;
pub mod errors;
pub mod paginate;
pub mod rest;
pub mod retry;

pub use client::{GitHub, GitHubConfig, DEFAULT_BASE_URL};
pub use errors::GitHubError;
pub use paginate::Paginated;
pub use rest::{ActionsApi, IssuesApi, ListOptions, PullsApi, ReposApi, StateFilter};
pub use retry::{RetrySettings, DEFAULT_EXEMPT_STATUS_CODES};

// Model types scripts receive, so callers need not depend on octocrab directly.
pub use octocrab::{models, Page};
