//! Shared plumbing behind every request builder.
//!
//! A builder is a URL template, a path-parameter map and a handle to the
//! adapter. Navigating to a child copies the map and adds the child's key,
//! so a builder can be reused and shared freely.
//!
//! Every operation follows the same four steps:
//! 1. build the `RequestInformation` from the template and parameters
//! 2. attach query parameters, headers and `Accept`
//! 3. attach the JSON body, if any
//! 4. hand it to the adapter with the OData error mappings

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::{ErrorMappings, RequestAdapter};
use crate::error::Result;
use crate::request::{PathParameters, RequestConfiguration, RequestInformation, RAW_URL_KEY};

pub(crate) const ACCEPT_JSON: &str = "application/json";
pub(crate) const ACCEPT_TEXT: &str = "text/plain;q=0.9";

/// Template, parameters and adapter for one resource.
#[derive(Clone)]
pub struct BaseRequestBuilder {
    adapter: Arc<dyn RequestAdapter>,
    url_template: String,
    path_parameters: PathParameters,
}

impl std::fmt::Debug for BaseRequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseRequestBuilder")
            .field("url_template", &self.url_template)
            .field("path_parameters", &self.path_parameters)
            .finish_non_exhaustive()
    }
}

impl BaseRequestBuilder {
    /// A builder for `url_template` with the given path parameters.
    pub fn new(
        adapter: Arc<dyn RequestAdapter>,
        url_template: impl Into<String>,
        path_parameters: PathParameters,
    ) -> Self {
        BaseRequestBuilder {
            adapter,
            url_template: url_template.into(),
            path_parameters,
        }
    }

    /// A builder that requests `raw_url` verbatim, e.g. an `@odata.nextLink`.
    pub fn from_raw_url(
        adapter: Arc<dyn RequestAdapter>,
        url_template: impl Into<String>,
        raw_url: &str,
    ) -> Self {
        let mut path_parameters = PathParameters::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.to_string());
        Self::new(adapter, url_template, path_parameters)
    }

    /// Navigates to a child resource that adds no path parameter.
    pub fn child(&self, url_template: impl Into<String>) -> Self {
        Self::new(
            Arc::clone(&self.adapter),
            url_template,
            self.path_parameters.clone(),
        )
    }

    /// Navigates to a child resource keyed by `key = value`.
    pub fn child_with(&self, url_template: impl Into<String>, key: &str, value: &str) -> Self {
        let mut child = self.child(url_template);
        child
            .path_parameters
            .insert(key.to_string(), value.to_string());
        child
    }

    /// The same resource addressed by an absolute URL.
    pub fn with_url(&self, raw_url: &str) -> Self {
        Self::from_raw_url(Arc::clone(&self.adapter), self.url_template.clone(), raw_url)
    }

    /// The adapter requests are sent through.
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    /// The URL template.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// The path parameters collected so far.
    pub fn path_parameters(&self) -> &PathParameters {
        &self.path_parameters
    }

    /// Builds the request for `method`, applying `config` and asking for JSON.
    pub fn request_information<Q: Serialize>(
        &self,
        method: Method,
        config: Option<RequestConfiguration<Q>>,
    ) -> Result<RequestInformation> {
        self.request_information_accepting(method, config, ACCEPT_JSON)
    }

    /// Like [`request_information`](Self::request_information) with a JSON body.
    pub fn request_information_with_body<Q: Serialize, B: Serialize + ?Sized>(
        &self,
        method: Method,
        body: &B,
        config: Option<RequestConfiguration<Q>>,
    ) -> Result<RequestInformation> {
        let mut info = self.request_information(method, config)?;
        info.set_json_content(body)?;
        Ok(info)
    }

    pub(crate) fn request_information_accepting<Q: Serialize>(
        &self,
        method: Method,
        config: Option<RequestConfiguration<Q>>,
        accept: &'static str,
    ) -> Result<RequestInformation> {
        let mut info = RequestInformation::new(
            method,
            self.url_template.clone(),
            self.path_parameters.clone(),
        );
        if let Some(config) = config {
            if let Some(query) = &config.query_parameters {
                info.add_query_parameters(query)?;
            }
            info.add_headers(&config.headers);
        }
        info.accept(accept);
        Ok(info)
    }

    /// `GET`, decoding the JSON body.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "GET", url_template = %self.url_template))]
    pub async fn get<T: DeserializeOwned, Q: Serialize>(
        &self,
        config: Option<RequestConfiguration<Q>>,
    ) -> Result<Option<T>> {
        let info = self.request_information(Method::GET, config)?;
        self.adapter.send(info, &ErrorMappings::odata()).await
    }

    /// `GET`, decoding a `text/plain` or JSON scalar.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "GET", url_template = %self.url_template))]
    pub async fn get_primitive<T, Q>(&self, config: Option<RequestConfiguration<Q>>) -> Result<Option<T>>
    where
        T: FromStr + DeserializeOwned,
        T::Err: Display,
        Q: Serialize,
    {
        let info = self.request_information_accepting(Method::GET, config, ACCEPT_TEXT)?;
        self.adapter.send_primitive(info, &ErrorMappings::odata()).await
    }

    /// `POST` with a JSON body, decoding the JSON response.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "POST", url_template = %self.url_template))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<T>> {
        let info = self.request_information_with_body(Method::POST, body, config)?;
        self.adapter.send(info, &ErrorMappings::odata()).await
    }

    /// `PATCH` with a JSON body, decoding the JSON response.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "PATCH", url_template = %self.url_template))]
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<T>> {
        let info = self.request_information_with_body(Method::PATCH, body, config)?;
        self.adapter.send(info, &ErrorMappings::odata()).await
    }

    /// `DELETE`, expecting no content.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "DELETE", url_template = %self.url_template))]
    pub async fn delete(&self, config: Option<RequestConfiguration>) -> Result<()> {
        let info = self.request_information(Method::DELETE, config)?;
        self.adapter
            .send_no_content(info, &ErrorMappings::odata())
            .await
    }

    /// `POST` with an optional JSON body, expecting no content.
    #[tracing::instrument(level = "debug", skip_all, fields(method = "POST", url_template = %self.url_template))]
    pub async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        body: Option<&B>,
        config: Option<RequestConfiguration>,
    ) -> Result<()> {
        let info = match body {
            Some(body) => self.request_information_with_body(Method::POST, body, config)?,
            None => self.request_information(Method::POST, config)?,
        };
        self.adapter
            .send_no_content(info, &ErrorMappings::odata())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::StubAdapter;
    use crate::query::ItemQueryParameters;
    use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

    const TEMPLATE: &str = "{+baseurl}/deviceManagement{?%24expand,%24select}";

    fn root(adapter: Arc<dyn RequestAdapter>) -> BaseRequestBuilder {
        BaseRequestBuilder::new(adapter, TEMPLATE, PathParameters::new())
    }

    #[test]
    fn child_copies_parameters_without_touching_parent() {
        let stub: Arc<dyn RequestAdapter> = StubAdapter::new(204, None, "");
        let parent = root(stub).child_with("{+baseurl}/a/{a%2Did}", "a%2Did", "1");
        let child = parent.child_with("{+baseurl}/a/{a%2Did}/b/{b%2Did}", "b%2Did", "2");

        assert_eq!(parent.path_parameters().len(), 1);
        assert_eq!(child.path_parameters().len(), 2);
        assert_eq!(child.path_parameters()["a%2Did"], "1");
    }

    #[test]
    fn request_information_applies_config_then_accept() {
        let stub: Arc<dyn RequestAdapter> = StubAdapter::new(204, None, "");
        let config = RequestConfiguration::new()
            .query(ItemQueryParameters::default().select(["id"]))
            .header(
                HeaderName::from_static("consistencylevel"),
                HeaderValue::from_static("eventual"),
            );
        let info = root(stub)
            .request_information(Method::GET, Some(config))
            .unwrap();

        assert_eq!(info.method, Method::GET);
        assert_eq!(info.url_template, TEMPLATE);
        assert_eq!(info.headers[ACCEPT], "application/json");
        assert_eq!(info.headers["consistencylevel"], "eventual");
        assert!(info.query_parameters.contains_key("%24select"));
    }

    #[test]
    fn caller_accept_header_wins() {
        let stub: Arc<dyn RequestAdapter> = StubAdapter::new(204, None, "");
        let config = RequestConfiguration::<()>::new()
            .header(ACCEPT, HeaderValue::from_static("application/xml"));
        let info = root(stub)
            .request_information(Method::GET, Some(config))
            .unwrap();
        assert_eq!(info.headers.get_all(ACCEPT).iter().count(), 1);
        assert_eq!(info.headers[ACCEPT], "application/xml");
    }

    #[test]
    fn with_url_keeps_template_and_sets_raw_url() {
        let stub: Arc<dyn RequestAdapter> = StubAdapter::new(204, None, "");
        let paged = root(stub).with_url("https://graph.microsoft.com/v1.0/next");
        assert_eq!(paged.url_template(), TEMPLATE);
        assert_eq!(
            paged.path_parameters()[RAW_URL_KEY],
            "https://graph.microsoft.com/v1.0/next"
        );
    }

    #[tokio::test]
    async fn patch_sends_json_body() {
        let stub = StubAdapter::new(200, Some("application/json"), r#"{"id":"x"}"#);
        let builder = root(stub.clone());
        let out: Option<serde_json::Value> = builder
            .patch(&serde_json::json!({"intuneBrand": {}}), None)
            .await
            .unwrap();
        assert_eq!(out.unwrap()["id"], "x");

        let sent = stub.last();
        assert_eq!(sent.method, Method::PATCH);
        assert_eq!(sent.headers[CONTENT_TYPE], "application/json");
        assert_eq!(sent.uri().unwrap().as_str(), "https://graph.microsoft.com/v1.0/deviceManagement");
    }

    #[tokio::test]
    async fn post_without_body_sends_no_content() {
        let stub = StubAdapter::new(204, None, "");
        root(stub.clone())
            .post_no_content::<()>(None, None)
            .await
            .unwrap();
        let sent = stub.last();
        assert_eq!(sent.method, Method::POST);
        assert!(sent.content.is_none());
        assert!(sent.headers.get(CONTENT_TYPE).is_none());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn send_paths_record_a_span_per_call() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let stub = StubAdapter::new(204, None, "");
        root(stub).delete(None).await.unwrap();

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("delete"), "span name missing: {output}");
        assert!(output.contains("method=\"DELETE\""), "method field missing: {output}");
        assert!(output.contains("{+baseurl}/deviceManagement"), "template missing: {output}");
    }
}
