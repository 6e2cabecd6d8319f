//! App-only tokens for Microsoft Graph.
//!
//! [`TokenProvider`] runs the OAuth2 client-credentials grant against an
//! identity-platform authority and holds on to the bearer token it gets
//! back. [`GraphClient`](crate::GraphClient) owns one provider: it asks for
//! `token()` before every call, runs `refresh_token()` when nothing usable is
//! cached, and calls `invalidate()` after Graph answers 401.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

use crate::error::{GraphError, Result};

/// Public-cloud Microsoft identity platform authority.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// App-only scope covering every Graph permission granted to the app.
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// A token is treated as stale this long before the service would reject it.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// `application/x-www-form-urlencoded` body of a client-credentials grant.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    client_id: &'a str,
    scope: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Fields of the token endpoint's answer that the provider reads.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    pub(crate) token_type: String,
    pub(crate) expires_in: u64,
}

/// A token together with the moment it was issued to us.
struct CachedToken {
    access_token: String,
    lifetime: Duration,
    issued: Instant,
}

impl CachedToken {
    fn new(response: TokenResponse) -> Self {
        CachedToken {
            access_token: response.access_token,
            lifetime: Duration::from_secs(response.expires_in),
            issued: Instant::now(),
        }
    }

    fn is_stale(&self) -> bool {
        self.issued.elapsed() >= self.lifetime.saturating_sub(REFRESH_MARGIN)
    }
}

/// Acquires and caches app-only bearer tokens.
///
/// `token()` yields `None` before the first successful refresh, after
/// `invalidate()`, and once the cached token is within a minute of expiry.
pub struct TokenProvider {
    client: reqwest::Client,
    authority: String,
    scope: String,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    cached: Option<CachedToken>,
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("authority", &self.authority)
            .field("scope", &self.scope)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("has_token", &self.cached.is_some())
            .finish()
    }
}

impl TokenProvider {
    /// Provider for an app registration in `tenant_id`. The first token is
    /// fetched lazily.
    pub fn new(tenant_id: &str, client_id: &str, client_secret: &str, scope: &str) -> Self {
        TokenProvider {
            client: reqwest::Client::new(),
            authority: DEFAULT_AUTHORITY.to_string(),
            scope: scope.to_string(),
            tenant_id: tenant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            cached: None,
        }
    }

    /// Provider that already holds `token`, valid for an hour. It never
    /// talks to an authority unless the token is invalidated.
    pub fn with_token(token: &str) -> Self {
        let mut provider = TokenProvider::new("", "", "", "");
        provider.cached = Some(CachedToken::new(TokenResponse {
            access_token: token.to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        }));
        provider
    }

    /// Uses another authority host, such as a national cloud or a local
    /// mock. A trailing `/` is ignored.
    pub fn with_authority(mut self, authority: &str) -> Self {
        self.authority = authority.trim_end_matches('/').to_string();
        self
    }

    fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant_id)
    }

    /// Runs the client-credentials grant and replaces the cached token.
    ///
    /// A rejected grant becomes [`GraphError::Auth`] carrying the endpoint's
    /// body verbatim, so the `AADSTS` code is visible to the caller.
    pub async fn refresh_token(&mut self) -> Result<()> {
        let form = TokenRequest {
            client_id: &self.client_id,
            scope: &self.scope,
            client_secret: &self.client_secret,
            grant_type: "client_credentials",
        };

        let url = self.token_url();
        tracing::debug!(%url, tenant = %self.tenant_id, "requesting access token");

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| GraphError::Auth {
                message: format!("token request to {url} failed"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GraphError::Auth {
            message: "failed to read token response".to_string(),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            tracing::warn!(%status, "token endpoint rejected the grant");
            return Err(GraphError::Auth {
                message: format!("token request failed ({status}): {body}"),
                source: None,
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| GraphError::Auth {
            message: "failed to parse token response".to_string(),
            source: Some(Box::new(e)),
        })?;
        if !parsed.token_type.eq_ignore_ascii_case("bearer") {
            tracing::warn!(token_type = %parsed.token_type, "unexpected token type");
        }
        self.cached = Some(CachedToken::new(parsed));

        Ok(())
    }

    /// Forgets the cached token.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The cached access token, unless it is missing or stale.
    pub fn token(&self) -> Option<&str> {
        self.cached
            .as_ref()
            .filter(|cached| !cached.is_stale())
            .map(|cached| cached.access_token.as_str())
    }
}
