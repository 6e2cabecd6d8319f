//! The abstract description of one HTTP call.
//!
//! Request builders never touch the network. They produce a
//! [`RequestInformation`] holding the method, URL template, path and query
//! parameters, headers and an optional serialized body, and hand it to a
//! [`RequestAdapter`](crate::adapter::RequestAdapter) which turns it into a
//! real request.

use std::collections::BTreeMap;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::error::{GraphError, Result};
use crate::uri_template::{self, TemplateValue, Variables};

/// Path parameter holding an absolute URL that replaces template expansion.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Path parameter the adapter fills with its base URL.
pub const BASE_URL_KEY: &str = "baseurl";

/// Path parameters keyed by template variable name.
pub type PathParameters = BTreeMap<String, String>;

/// Everything needed to issue one request.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    /// HTTP method.
    pub method: Method,
    /// RFC 6570 URL template, e.g. `{+baseurl}/deviceManagement{?%24select}`.
    pub url_template: String,
    /// Values for the path variables of the template.
    pub path_parameters: PathParameters,
    /// Values for the query variables of the template.
    pub query_parameters: Variables,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized request body.
    pub content: Option<Bytes>,
}

impl RequestInformation {
    /// Creates a request with no headers, query parameters or body.
    pub fn new(method: Method, url_template: impl Into<String>, path_parameters: PathParameters) -> Self {
        RequestInformation {
            method,
            url_template: url_template.into(),
            path_parameters,
            query_parameters: Variables::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// Merges the fields of a query-parameter struct into the query
    /// parameters.
    ///
    /// The struct is serialized through serde. `null` fields are dropped,
    /// arrays become list values and scalars their plain string form.
    pub fn add_query_parameters<Q: Serialize + ?Sized>(&mut self, query: &Q) -> Result<()> {
        let value = serde_json::to_value(query).map_err(|e| {
            GraphError::InvalidRequest(format!("query parameters do not serialize: {e}"))
        })?;
        let fields = match value {
            Value::Null => return Ok(()),
            Value::Object(fields) => fields,
            other => {
                return Err(GraphError::InvalidRequest(format!(
                    "query parameters must serialize to a record, got {other}"
                )))
            }
        };

        for (name, value) in fields {
            let rendered = match value {
                Value::Null => continue,
                Value::Array(items) => TemplateValue::List(
                    items
                        .into_iter()
                        .map(|item| scalar(&name, item))
                        .collect::<Result<_>>()?,
                ),
                other => TemplateValue::Str(scalar(&name, other)?),
            };
            self.query_parameters.insert(name, rendered);
        }
        Ok(())
    }

    /// Sets the `baseurl` path parameter, without a trailing `/`.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.path_parameters.insert(
            BASE_URL_KEY.to_string(),
            base_url.trim_end_matches('/').to_string(),
        );
    }

    /// Resolves the final request URL.
    ///
    /// A `request-raw-url` path parameter wins over the template and is used
    /// verbatim.
    pub fn uri(&self) -> Result<Url> {
        if let Some(raw) = self.path_parameters.get(RAW_URL_KEY) {
            return parse_url(raw);
        }

        let mut vars: Variables = self
            .path_parameters
            .iter()
            .map(|(k, v)| (k.clone(), TemplateValue::Str(v.clone())))
            .collect();
        vars.extend(
            self.query_parameters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        let expanded = uri_template::expand(&self.url_template, &vars)?;
        parse_url(&expanded)
    }

    /// Serializes `body` as JSON and sets `Content-Type: application/json`.
    pub fn set_json_content<B: Serialize + ?Sized>(&mut self, body: &B) -> Result<()> {
        let bytes = serde_json::to_vec(body)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.content = Some(Bytes::from(bytes));
        Ok(())
    }

    /// Adds a header unless one with the same name is already present.
    /// Returns whether the header was added.
    pub fn try_add_header(&mut self, name: HeaderName, value: HeaderValue) -> bool {
        if self.headers.contains_key(&name) {
            return false;
        }
        self.headers.insert(name, value);
        true
    }

    /// Appends every header in `headers`, keeping existing values.
    pub fn add_headers(&mut self, headers: &HeaderMap) {
        for (name, value) in headers {
            self.headers.append(name.clone(), value.clone());
        }
    }

    /// Sets `Accept` unless the caller already chose one.
    pub(crate) fn accept(&mut self, media_type: &'static str) {
        self.try_add_header(ACCEPT, HeaderValue::from_static(media_type));
    }
}

fn scalar(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(GraphError::InvalidRequest(format!(
            "query parameter {name} must be a scalar or a list of scalars, got {other}"
        ))),
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| GraphError::InvalidRequest(format!("invalid URL {raw}: {e}")))
}

/// Per-call options: extra headers and typed query parameters.
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q = ()> {
    /// Headers added to the request.
    pub headers: HeaderMap,
    /// Query parameters applied to the URL template.
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        RequestConfiguration {
            headers: HeaderMap::new(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query parameters.
    pub fn query(mut self, query: Q) -> Self {
        self.query_parameters = Some(query);
        self
    }

    /// Adds a header, e.g. `ConsistencyLevel: eventual` for `$search`.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Query {
        #[serde(rename = "%24top", skip_serializing_if = "Option::is_none")]
        top: Option<i32>,
        #[serde(rename = "%24count", skip_serializing_if = "Option::is_none")]
        count: Option<bool>,
        #[serde(rename = "%24select", skip_serializing_if = "Option::is_none")]
        select: Option<Vec<String>>,
        #[serde(rename = "%24filter")]
        filter: Option<String>,
    }

    fn info() -> RequestInformation {
        let mut info = RequestInformation::new(
            Method::GET,
            "{+baseurl}/deviceManagement/managedDevices{?%24count,%24filter,%24select,%24top}",
            PathParameters::new(),
        );
        info.set_base_url("https://graph.microsoft.com/v1.0/");
        info
    }

    #[test]
    fn uri_without_query_parameters() {
        assert_eq!(
            info().uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices"
        );
    }

    #[test]
    fn query_struct_fields_expand_into_template() {
        let mut info = info();
        info.add_query_parameters(&Query {
            top: Some(5),
            count: Some(true),
            select: Some(vec!["id".into(), "deviceName".into()]),
            filter: None,
        })
        .unwrap();
        assert_eq!(
            info.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices?%24count=true&%24select=id,deviceName&%24top=5"
        );
    }

    #[test]
    fn unit_query_adds_nothing() {
        let mut info = info();
        info.add_query_parameters(&()).unwrap();
        assert!(info.query_parameters.is_empty());
    }

    #[test]
    fn non_record_query_is_rejected() {
        let mut info = info();
        let err = info.add_query_parameters(&5).unwrap_err();
        assert!(matches!(err, GraphError::InvalidRequest(_)));
    }

    #[test]
    fn raw_url_overrides_template() {
        let mut params = PathParameters::new();
        params.insert(
            RAW_URL_KEY.to_string(),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices?$skiptoken=xyz".to_string(),
        );
        let mut info = RequestInformation::new(Method::GET, "{+baseurl}/ignored{?%24top}", params);
        info.add_query_parameters(&Query {
            top: Some(1),
            count: None,
            select: None,
            filter: None,
        })
        .unwrap();
        assert_eq!(
            info.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/deviceManagement/managedDevices?$skiptoken=xyz"
        );
    }

    #[test]
    fn missing_base_url_is_invalid_request() {
        let info = RequestInformation::new(Method::GET, "{+baseurl}/deviceManagement", PathParameters::new());
        assert!(matches!(info.uri(), Err(GraphError::InvalidRequest(_))));
    }

    #[test]
    fn json_content_sets_content_type() {
        let mut info = info();
        info.set_json_content(&serde_json::json!({"notes": "lost"}))
            .unwrap();
        assert_eq!(info.headers[CONTENT_TYPE], "application/json");
        assert_eq!(info.content.as_deref(), Some(&br#"{"notes":"lost"}"#[..]));
    }

    #[test]
    fn try_add_header_keeps_caller_value() {
        let mut info = info();
        info.headers
            .insert(ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!info.try_add_header(ACCEPT, HeaderValue::from_static("application/json")));
        assert_eq!(info.headers[ACCEPT], "text/plain");
    }

    #[test]
    fn configuration_builder_collects_headers_and_query() {
        let config = RequestConfiguration::new()
            .query(5_i32)
            .header(
                HeaderName::from_static("consistencylevel"),
                HeaderValue::from_static("eventual"),
            );
        assert_eq!(config.query_parameters, Some(5));
        assert_eq!(config.headers["consistencylevel"], "eventual");
    }
}
