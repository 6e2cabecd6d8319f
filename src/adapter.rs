//! The seam between request builders and the transport.
//!
//! A [`RequestAdapter`] executes a [`RequestInformation`] and returns the raw
//! [`HttpResponse`]. Everything after that is shared by all adapters and
//! lives here as methods on `dyn RequestAdapter`:
//!
//! 1. failed statuses are mapped through [`ErrorMappings`] to a typed error
//! 2. `204` and bodiless responses become `None`
//! 3. the body is decoded according to its content type
//!
//! Error mapping resolves the exact status code first, then the class
//! (`4XX`/`5XX`), then the catch-all `XXX`.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{GraphError, Result};
use crate::models::ODataError;
use crate::request::RequestInformation;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body, possibly empty.
    pub body: Bytes,
}

impl HttpResponse {
    /// The lower-cased media type of `Content-Type`, without parameters.
    pub fn content_type(&self) -> Option<String> {
        let raw = self.headers.get(CONTENT_TYPE)?.to_str().ok()?;
        let primary = raw.split(';').next()?.trim();
        if primary.is_empty() {
            return None;
        }
        Some(primary.to_ascii_lowercase())
    }
}

/// Executes requests against a service.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    /// Base URL substituted for `{+baseurl}`.
    fn base_url(&self) -> &str;

    /// Sends the request and reads the whole response.
    ///
    /// Implementations return `Ok` for every status the server answers with;
    /// status interpretation is left to the caller.
    async fn execute(&self, info: RequestInformation) -> Result<HttpResponse>;
}

/// Decodes an error body into the typed OData error.
pub type ErrorFactory = fn(&[u8]) -> serde_json::Result<ODataError>;

/// Error factories keyed by `"404"`, `"4XX"`, `"5XX"` or `"XXX"`.
#[derive(Clone, Default)]
pub struct ErrorMappings {
    factories: BTreeMap<String, ErrorFactory>,
}

impl fmt::Debug for ErrorMappings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl ErrorMappings {
    /// An empty table. Every failed status becomes [`GraphError::Api`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The table every Graph operation uses: any 4xx/5xx is an OData error.
    pub fn odata() -> Self {
        Self::new().with("XXX", ODataError::from_json)
    }

    /// Registers `factory` for `key`.
    pub fn with(mut self, key: impl Into<String>, factory: ErrorFactory) -> Self {
        self.factories.insert(key.into(), factory);
        self
    }

    /// Finds the factory for `status`.
    pub fn resolve(&self, status: StatusCode) -> Option<ErrorFactory> {
        let code = status.as_u16();
        if let Some(f) = self.factories.get(&code.to_string()) {
            return Some(*f);
        }
        let class = match code {
            400..=499 => Some("4XX"),
            500..=599 => Some("5XX"),
            _ => None,
        };
        if let Some(f) = class.and_then(|c| self.factories.get(c)) {
            return Some(*f);
        }
        if (400..=599).contains(&code) {
            return self.factories.get("XXX").copied();
        }
        None
    }
}

/// Turns a failed response into an error; responses below 400 pass.
pub fn throw_if_failed(response: &HttpResponse, mappings: &ErrorMappings) -> Result<()> {
    let status = response.status;
    if status.as_u16() < 400 {
        return Ok(());
    }

    let Some(factory) = mappings.resolve(status) else {
        return Err(GraphError::Api {
            status,
            message: format!(
                "The server returned an unexpected status code and no error factory is registered for this code: {}",
                status.as_u16()
            ),
        });
    };

    if response.body.is_empty() || response.content_type().is_none() {
        return Err(GraphError::Api {
            status,
            message: format!(
                "The server returned an unexpected status code with no response body: {}",
                status.as_u16()
            ),
        });
    }

    let error = factory(&response.body)?;
    tracing::debug!(status = status.as_u16(), code = %error.error.code, "mapped error response");
    Err(GraphError::OData {
        status,
        error: Box::new(error),
    })
}

fn is_json(content_type: &str) -> bool {
    content_type == "application/json" || content_type.ends_with("+json")
}

// Applies the shared failure and no-content rules. Returns the content type
// of a decodable body, or `None` when there is nothing to decode.
fn decodable(response: &HttpResponse, mappings: &ErrorMappings) -> Result<Option<String>> {
    throw_if_failed(response, mappings)?;
    if response.status == StatusCode::NO_CONTENT || response.body.is_empty() {
        return Ok(None);
    }
    Ok(response.content_type())
}

impl dyn RequestAdapter {
    /// Executes `info` and decodes a JSON body into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        info: RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Option<T>> {
        let response = self.execute(info).await?;
        let Some(content_type) = decodable(&response, mappings)? else {
            return Ok(None);
        };
        if !is_json(&content_type) {
            return Err(GraphError::UnexpectedContent {
                content_type,
                message: "expected a JSON body".to_string(),
            });
        }
        Ok(Some(serde_json::from_slice(&response.body)?))
    }

    /// Executes `info` and discards any body.
    pub async fn send_no_content(
        &self,
        info: RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<()> {
        let response = self.execute(info).await?;
        throw_if_failed(&response, mappings)
    }

    /// Executes `info` and decodes a scalar, from `text/plain` or JSON.
    pub async fn send_primitive<T>(
        &self,
        info: RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Option<T>>
    where
        T: FromStr + DeserializeOwned,
        T::Err: Display,
    {
        let response = self.execute(info).await?;
        let Some(content_type) = decodable(&response, mappings)? else {
            return Ok(None);
        };

        if is_json(&content_type) {
            return Ok(Some(serde_json::from_slice(&response.body)?));
        }
        if content_type != "text/plain" {
            return Err(GraphError::UnexpectedContent {
                content_type,
                message: "expected text/plain or JSON".to_string(),
            });
        }

        let text = std::str::from_utf8(&response.body).map_err(|e| {
            GraphError::UnexpectedContent {
                content_type: content_type.clone(),
                message: e.to_string(),
            }
        })?;
        text.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| GraphError::UnexpectedContent {
                content_type,
                message: format!("cannot parse {text:?}: {e}"),
            })
    }

    /// Executes `info` and returns the raw body.
    pub async fn send_bytes(
        &self,
        info: RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Option<Bytes>> {
        let response = self.execute(info).await?;
        throw_if_failed(&response, mappings)?;
        if response.status == StatusCode::NO_CONTENT || response.body.is_empty() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }
}
