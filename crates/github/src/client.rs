//! The API client handle exposed to scripts.

use std::fmt;
use std::future::Future;

use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use octocrab::models::{Author, Repository};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{FromResponse, Octocrab};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use toolkit::RetryPolicy;

use crate::rest::{ActionsApi, IssuesApi, PullsApi, ReposApi};
use crate::{GitHubError, Paginated, RetrySettings};

/// Public REST API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("github-script/", env!("CARGO_PKG_VERSION"));

/// An undecoded REST response, as returned by octocrab's low-level calls.
pub(crate) type RawResponse = http::Response<BoxBody<Bytes, octocrab::Error>>;

/// Construction parameters for [`GitHub`].
#[derive(Clone, Default)]
pub struct GitHubConfig {
    /// Access token. `None` yields an unauthenticated, heavily rate-limited
    /// client.
    pub token: Option<String>,
    /// REST API root; defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Status-code retry behaviour for REST calls.
    pub retry: RetrySettings,
}

impl GitHubConfig {
    /// An authenticated configuration against the public API.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Authenticated access to the platform's REST and GraphQL APIs.
///
/// REST calls go through `octocrab` and honour the configured
/// [`RetrySettings`]; GraphQL calls are single `reqwest` POSTs.
pub struct GitHub {
    inner: Octocrab,
    http: reqwest::Client,
    token: Option<String>,
    base_url: String,
    retry: RetrySettings,
}

impl GitHub {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// [`GitHubError::InvalidBaseUrl`] when the base URL is not a valid URI;
    /// [`GitHubError::Api`] / [`GitHubError::Http`] when a client cannot be
    /// constructed.
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let base_url = config
            .base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Our own policy decides retries; octocrab's layer would double them.
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(base_url.as_str())
            .map_err(|source| GitHubError::InvalidBaseUrl {
                url: base_url.clone(),
                source,
            })?;
        if let Some(token) = &config.token {
            builder = builder.personal_token(token.clone());
        }
        let inner = builder.build()?;

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        tracing::debug!(
            base_url = %base_url,
            authenticated = config.token.is_some(),
            retries = config.retry.retries(),
            "constructed API client"
        );

        Ok(Self {
            inner,
            http,
            token: config.token,
            base_url,
            retry: config.retry,
        })
    }

    /// The underlying `octocrab` handle, for endpoints not re-exposed here.
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }

    /// REST API root, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retry behaviour applied to REST calls.
    pub fn retry_settings(&self) -> &RetrySettings {
        &self.retry
    }

    // -----------------------------------------------------------------------
    // Direct lookups
    // -----------------------------------------------------------------------

    /// Fetches `owner/repo`.
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        self.get_json("get_repo", &format!("/repos/{owner}/{repo}"))
            .await
    }

    /// Fetches the public profile of `username`.
    pub async fn get_user(&self, username: &str) -> Result<Author, GitHubError> {
        self.get_json("get_user", &format!("/users/{username}")).await
    }

    // -----------------------------------------------------------------------
    // GraphQL
    // -----------------------------------------------------------------------

    /// POSTs `query` (and `variables`, when given) to `{base_url}/graphql` and
    /// returns the decoded response body.
    ///
    /// Any non-success status is an error; GraphQL-level `errors` in a 200
    /// response are returned to the caller untouched.
    pub async fn graphql(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> Result<Value, GitHubError> {
        let url = format!("{}/graphql", self.base_url);
        let mut request = self
            .http
            .post(&url)
            .json(&GraphqlRequest { query, variables });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %url, "sending GraphQL request");
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    // -----------------------------------------------------------------------
    // Pagination
    // -----------------------------------------------------------------------

    /// Awaits `request` and flattens its result into a list.
    ///
    /// [`Paginated::Single`] becomes a one-element list. For
    /// [`Paginated::Collection`] every remaining page is fetched and all items
    /// are returned in order.
    pub async fn paginate<T, Fut>(&self, request: Fut) -> Result<Vec<T>, GitHubError>
    where
        T: DeserializeOwned,
        Fut: Future<Output = Result<Paginated<T>, GitHubError>>,
    {
        match request.await? {
            Paginated::Single(item) => Ok(vec![item]),
            Paginated::Collection(page) => Ok(self.inner.all_pages(page).await?),
        }
    }

    // -----------------------------------------------------------------------
    // Resource sub-clients
    // -----------------------------------------------------------------------

    /// Issue and comment operations.
    pub fn issues(&self) -> IssuesApi<'_> {
        IssuesApi::new(self)
    }

    /// Repository and commit operations.
    pub fn repos(&self) -> ReposApi<'_> {
        ReposApi::new(self)
    }

    /// Pull request operations.
    pub fn pulls(&self) -> PullsApi<'_> {
        PullsApi::new(self)
    }

    /// Workflow run operations.
    pub fn actions(&self) -> ActionsApi<'_> {
        ActionsApi::new(self)
    }

    // -----------------------------------------------------------------------
    // Requests and the retry loop
    // -----------------------------------------------------------------------

    /// GETs `route` (relative to the base URL) through the retry loop.
    pub(crate) async fn get_json<R>(
        &self,
        operation: &'static str,
        route: &str,
    ) -> Result<R, GitHubError>
    where
        R: FromResponse,
    {
        let octo = &self.inner;
        self.send(operation, move || async move { octo._get(route).await })
            .await
    }

    /// POSTs `body` as JSON to `route` through the retry loop.
    pub(crate) async fn post_json<R, B>(
        &self,
        operation: &'static str,
        route: &str,
        body: &B,
    ) -> Result<R, GitHubError>
    where
        R: FromResponse,
        B: Serialize + ?Sized,
    {
        let octo = &self.inner;
        self.send(operation, move || async move { octo._post(route, Some(body)).await })
            .await
    }

    /// Runs `request` until it succeeds or the retry policy gives up, then
    /// decodes the successful response.
    ///
    /// The status is read from the raw response before the body is touched,
    /// so a gateway error page counts as that status even though its body is
    /// not a platform error document.
    pub(crate) async fn send<R, F, Fut>(
        &self,
        operation: &'static str,
        mut request: F,
    ) -> Result<R, GitHubError>
    where
        R: FromResponse,
        F: FnMut() -> Fut,
        Fut: Future<Output = octocrab::Result<RawResponse>>,
    {
        let mut failures = 0;
        loop {
            let err = match request().await {
                Ok(response) => {
                    let status = response.status();
                    match octocrab::map_github_error(response).await {
                        Ok(response) => return Ok(R::from_response(response).await?),
                        Err(source) => GitHubError::Status {
                            status: status.as_u16(),
                            source,
                        },
                    }
                }
                Err(source) => GitHubError::Api(source),
            };
            failures += 1;

            let status = err.status();
            match self.retry.policy_for(status, failures) {
                RetryPolicy::Retryable { after } => {
                    tracing::warn!(
                        operation,
                        status,
                        attempt = failures + 1,
                        backoff_ms = after.map(|d| d.as_millis() as u64).unwrap_or(0),
                        "request failed; retrying"
                    );
                    if let Some(delay) = after {
                        tokio::time::sleep(delay).await;
                    }
                }
                RetryPolicy::NonRetryable => return Err(err),
            }
        }
    }
}

impl fmt::Debug for GitHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHub")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
