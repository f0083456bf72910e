//! Resource sub-clients.
//!
//! Each sub-client groups the operations for one platform resource. Every
//! method addresses the repository by owner and name and sends the request
//! through the client's retry loop, decoding into `octocrab`'s models.
//! Nothing is validated here beyond what the platform itself enforces.

mod actions;
#[cfg(test)]
pub(crate) mod fixtures;
mod issues;
mod pulls;
mod repos;

pub use actions::ActionsApi;
pub use issues::IssuesApi;
pub use pulls::PullsApi;
pub use repos::ReposApi;

/// Open/closed filter for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

impl StateFilter {
    /// The value the platform expects in the `state` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Optional filters shared by the list operations.
///
/// Unset fields are left to the platform's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only list items in this state (issues and pull requests).
    pub state: Option<StateFilter>,
    /// Items per page, at most 100.
    pub per_page: Option<u8>,
    /// First page to fetch (1-based).
    pub page: Option<u32>,
}

impl ListOptions {
    /// Filters by state.
    pub fn state(mut self, state: StateFilter) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets the page size.
    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the first page to fetch.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// `route` with the set filters appended as a query string.
    pub(crate) fn route(&self, route: &str) -> String {
        let mut query = Vec::new();
        if let Some(state) = self.state {
            query.push(format!("state={}", state.as_str()));
        }
        if let Some(per_page) = self.per_page {
            query.push(format!("per_page={per_page}"));
        }
        if let Some(page) = self.page {
            query.push(format!("page={page}"));
        }
        if query.is_empty() {
            route.to_string()
        } else {
            format!("{route}?{}", query.join("&"))
        }
    }
}

/// A client pointed at a mock server, without retries.
#[cfg(test)]
pub(crate) fn mock_client(server_url: String) -> crate::GitHub {
    crate::GitHub::new(crate::GitHubConfig {
        token: Some("t0ken".to_string()),
        base_url: Some(server_url),
        retry: crate::RetrySettings::disabled(),
    })
    .expect("mock client")
}

/// A platform error body octocrab can decode.
#[cfg(test)]
pub(crate) const MOCK_ERROR_BODY: &str =
    r#"{"message":"Validation Failed","documentation_url":"https://docs.github.com/rest"}"#;
