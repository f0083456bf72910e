//! Error type for the API client adapter.
//!
//! Failures from the underlying clients are wrapped, never translated: a
//! script sees the same `octocrab` or `reqwest` error it would see calling
//! those crates directly. Non-success REST responses additionally keep the
//! raw HTTP status, whether or not the body was a platform error document.

use thiserror::Error;

/// Errors returned by [`crate::GitHub`] and its resource sub-clients.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// A REST call got a non-success response.
    ///
    /// `source` is the platform's decoded error document, or the decoding
    /// failure when the body was not one (an HTML gateway page, for example).
    #[error("Request failed with status {status}: {source}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        #[source]
        source: octocrab::Error,
    },

    /// A REST call failed without a response (transport, decoding of a
    /// success body, or page following).
    #[error(transparent)]
    Api(#[from] octocrab::Error),

    /// A GraphQL call failed (non-success status, transport, or decoding).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The configured API base URL could not be used.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        #[source]
        source: octocrab::Error,
    },
}

impl GitHubError {
    /// The HTTP status of the failed response, when the failure had one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Api(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            Self::Api(_) | Self::InvalidBaseUrl { .. } => None,
            Self::Http(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
