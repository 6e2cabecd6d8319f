//! Authenticated reqwest adapter for Microsoft Graph.
//!
//! `GraphClient` wraps a `reqwest::Client` and a `TokenProvider` behind a
//! `Mutex` and implements [`RequestAdapter`], so every request builder in
//! the crate runs through it.
//!
//! Token lifecycle:
//! - Lazy acquisition: the first request that finds no cached token triggers
//!   `refresh_token()` automatically via `bearer_token()`.
//! - Expiry-aware: `TokenProvider::token()` returns `None` when the cached
//!   token has expired, which triggers a fresh refresh on the next request.
//! - One-shot 401 retry: if Graph returns `401 Unauthorized` (e.g. because
//!   the token was revoked server-side before our local expiry check caught
//!   it), the client invalidates the cached token, refreshes once, and
//!   retries the request exactly once. A second 401 is returned to the
//!   caller like any other status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::adapter::{HttpResponse, RequestAdapter};
use crate::auth::TokenProvider;
use crate::error::{GraphError, Result};
use crate::request::RequestInformation;

/// Microsoft Graph v1.0 service root.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Connect timeout for Graph calls. Covers TCP + TLS handshake only.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout for Graph calls, including reading the body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

fn build_api_client(connect_timeout: Duration, request_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
}

/// Authenticated HTTP client for Microsoft Graph.
///
/// `auth` is behind a `Mutex` because `refresh_token()` requires `&mut self`
/// while requests only need `&self`. The lock is held only for the token
/// check/refresh, never across a Graph round-trip.
pub struct GraphClient {
    client: Client,
    base_url: String,
    auth: Mutex<TokenProvider>,
}

/// Configures a [`GraphClient`].
#[derive(Debug, Clone)]
pub struct GraphClientBuilder {
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl Default for GraphClientBuilder {
    fn default() -> Self {
        GraphClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl GraphClientBuilder {
    /// Overrides the service root, e.g. a national cloud or a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Overrides the overall request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the client. Fails only if the TLS backend cannot initialize.
    pub fn build(self, auth: TokenProvider) -> Result<GraphClient> {
        Ok(GraphClient {
            client: build_api_client(self.connect_timeout, self.request_timeout)?,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            auth: Mutex::new(auth),
        })
    }
}

impl GraphClient {
    /// A client for the public Graph v1.0 endpoint with default timeouts.
    pub fn new(auth: TokenProvider) -> Self {
        GraphClient {
            client: build_api_client(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
                .expect("failed to build HTTP client for Microsoft Graph"),
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: Mutex::new(auth),
        }
    }

    /// Constructor that accepts a custom base URL, used by tests to point
    /// at a local mock server instead of Graph.
    pub fn with_base_url(auth: TokenProvider, base_url: &str) -> Self {
        GraphClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::new(auth)
        }
    }

    /// Starts configuring a client.
    pub fn builder() -> GraphClientBuilder {
        GraphClientBuilder::default()
    }

    /// Returns a valid bearer token, refreshing if none is cached or if the
    /// current token has expired.
    async fn bearer_token(&self) -> Result<String> {
        let mut auth = self.auth.lock().await;
        if auth.token().is_none() {
            auth.refresh_token().await?;
        }

        auth.token().map(str::to_owned).ok_or_else(|| GraphError::Auth {
            message: "token missing after refresh".to_string(),
            source: None,
        })
    }

    /// Invalidates the current token and acquires a fresh one.
    async fn force_refresh(&self) -> Result<String> {
        let mut auth = self.auth.lock().await;
        auth.invalidate();
        auth.refresh_token().await?;

        auth.token().map(str::to_owned).ok_or_else(|| GraphError::Auth {
            message: "token missing after forced refresh".to_string(),
            source: None,
        })
    }

    /// Constructs an authenticated request carrying the headers and body of
    /// `info`. Shared by the first attempt and the retry.
    fn build_request(&self, info: &RequestInformation, url: &Url, token: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(info.method.clone(), url.clone())
            .headers(info.headers.clone())
            .bearer_auth(token);
        if let Some(content) = &info.content {
            req = req.body(content.clone());
        }
        req
    }

    async fn send_once(&self, info: &RequestInformation, url: &Url, token: &str) -> Result<reqwest::Response> {
        Ok(self.build_request(info, url, token).send().await?)
    }
}

async fn read_response(resp: reqwest::Response) -> Result<HttpResponse> {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp.bytes().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[async_trait]
impl RequestAdapter for GraphClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, mut info: RequestInformation) -> Result<HttpResponse> {
        let span = tracing::debug_span!(
            "graph_request",
            method = %info.method,
            url_template = %info.url_template,
        );

        async move {
            info.set_base_url(&self.base_url);
            let url = info.uri()?;

            let token = self.bearer_token().await?;
            let resp = self.send_once(&info, &url, &token).await?;

            if resp.status() == StatusCode::UNAUTHORIZED {
                tracing::warn!(%url, "access token rejected, refreshing and retrying once");
                let fresh_token = self.force_refresh().await?;
                let retry = self.send_once(&info, &url, &fresh_token).await?;
                return read_response(retry).await;
            }

            read_response(resp).await
        }
        .instrument(span)
        .await
    }
}
