//! File-based configuration for the client and CLI.
//!
//! ```toml
//! tenant_id = "00000000-0000-0000-0000-000000000000"
//! client_id = "11111111-1111-1111-1111-111111111111"
//! # client_secret may be omitted in favour of GRAPH_CLIENT_SECRET
//! base_url = "https://graph.microsoft.com/v1.0"
//! request_timeout_secs = 100
//! ```
//!
//! Every key is optional in the file. Credentials must be present by the
//! time a client is built, either from the file, the environment, or CLI
//! flags applied on top.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::auth::{TokenProvider, DEFAULT_AUTHORITY, GRAPH_SCOPE};
use crate::client::{GraphClient, DEFAULT_BASE_URL};
use crate::error::{GraphError, Result};
use crate::service::GraphServiceClient;

/// Environment variable consulted when `client_secret` is not configured.
pub const CLIENT_SECRET_ENV: &str = "GRAPH_CLIENT_SECRET";

/// Connection settings for Microsoft Graph.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Directory (tenant) id.
    pub tenant_id: Option<String>,
    /// Application (client) id.
    pub client_id: Option<String>,
    /// Client secret. Prefer [`CLIENT_SECRET_ENV`] over storing it on disk.
    pub client_secret: Option<String>,
    /// Graph service root.
    pub base_url: String,
    /// OAuth2 scope requested for app-only tokens.
    pub scope: String,
    /// Identity platform authority.
    pub authority: String,
    /// TCP + TLS connect timeout.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout.
    pub request_timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            tenant_id: None,
            client_id: None,
            client_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            scope: GRAPH_SCOPE.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 100,
        }
    }
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("scope", &self.scope)
            .field("authority", &self.authority)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GraphConfig {
    /// Reads a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GraphError::Config {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            GraphError::Config { message, source } => GraphError::Config {
                message: format!("{}: {message}", path.display()),
                source,
            },
            other => other,
        })
    }

    /// Parses TOML configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config {
            message: "invalid configuration".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// The configured secret, falling back to `GRAPH_CLIENT_SECRET`.
    pub fn resolved_client_secret(&self) -> Option<String> {
        self.client_secret
            .clone()
            .or_else(|| std::env::var(CLIENT_SECRET_ENV).ok())
            .filter(|s| !s.is_empty())
    }

    /// A token provider for the configured app registration.
    pub fn token_provider(&self) -> Result<TokenProvider> {
        let tenant_id = required(&self.tenant_id, "tenant_id")?;
        let client_id = required(&self.client_id, "client_id")?;
        let secret = self.resolved_client_secret().ok_or_else(|| GraphError::Config {
            message: format!("client_secret is not set and {CLIENT_SECRET_ENV} is empty"),
            source: None,
        })?;

        Ok(TokenProvider::new(tenant_id, client_id, &secret, &self.scope).with_authority(&self.authority))
    }

    /// A Graph client built from this configuration.
    pub fn build_client(&self) -> Result<GraphClient> {
        GraphClient::builder()
            .base_url(self.base_url.clone())
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .request_timeout(Duration::from_secs(self.request_timeout_secs))
            .build(self.token_provider()?)
    }

    /// The request builder root backed by [`build_client`](Self::build_client).
    pub fn service_client(&self) -> Result<GraphServiceClient> {
        Ok(GraphServiceClient::new(Arc::new(self.build_client()?)))
    }
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GraphError::Config {
            message: format!("{key} is required"),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = GraphConfig::from_toml("").unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.base_url, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.scope, "https://graph.microsoft.com/.default");
        assert_eq!(config.request_timeout_secs, 100);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = GraphConfig::from_toml(
            r#"
            tenant_id = "t"
            client_id = "c"
            client_secret = "s"
            base_url = "https://graph.microsoft.us/v1.0"
            authority = "https://login.microsoftonline.us"
            connect_timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.tenant_id.as_deref(), Some("t"));
        assert_eq!(config.base_url, "https://graph.microsoft.us/v1.0");
        assert_eq!(config.connect_timeout_secs, 3);
        assert_eq!(config.request_timeout_secs, 100);
        assert!(config.build_client().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GraphConfig::from_toml("tenant = \"typo\"").unwrap_err();
        assert!(matches!(err, GraphError::Config { .. }));
    }

    #[test]
    fn missing_credentials_are_config_errors() {
        let config = GraphConfig {
            client_id: Some("c".to_string()),
            client_secret: Some("s".to_string()),
            ..Default::default()
        };
        let err = config.token_provider().unwrap_err();
        assert!(err.to_string().contains("tenant_id is required"));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = GraphConfig {
            client_secret: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = GraphConfig::load(Path::new("/nonexistent/graph.toml")).unwrap_err();
        match err {
            GraphError::Config { message, source } => {
                assert!(message.contains("/nonexistent/graph.toml"));
                assert!(source.is_some());
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }
}
