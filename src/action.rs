//! Builders for OData bound actions.
//!
//! A bound action is a `POST` to a segment below an entity, e.g.
//! `/deviceManagement/managedDevices/{id}/rebootNow`. Graph answers most of
//! them with `204 No Content`, so three shapes cover the whole surface:
//!
//! - [`ActionRequestBuilder`]: no body, no result (`retire`, `syncDevice`)
//! - [`ActionWithBodyRequestBuilder`]: a body, no result (`wipe`)
//! - [`ActionWithResponseRequestBuilder`]: a body and a result (`assign`)

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::builder::BaseRequestBuilder;
use crate::error::Result;
use crate::request::{RequestConfiguration, RequestInformation};

// ── No body, no result ───────────────────────────────────────────────

/// Builder for an action that takes no parameters.
#[derive(Debug, Clone)]
pub struct ActionRequestBuilder {
    base: BaseRequestBuilder,
}

impl ActionRequestBuilder {
    /// The action at `url_template` below `parent`.
    pub fn new(parent: &BaseRequestBuilder, url_template: &'static str) -> Self {
        ActionRequestBuilder {
            base: parent.child(url_template),
        }
    }

    /// Invokes the action.
    pub async fn post(&self, config: Option<RequestConfiguration>) -> Result<()> {
        self.base.post_no_content::<()>(None, config).await
    }

    /// The request `post` would send.
    pub fn to_post_request_information(
        &self,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::POST, config)
    }
}

// ── Body, no result ──────────────────────────────────────────────────

/// Builder for an action that takes a `B` body and returns nothing.
#[derive(Debug)]
pub struct ActionWithBodyRequestBuilder<B> {
    base: BaseRequestBuilder,
    _body: PhantomData<fn(&B)>,
}

impl<B> Clone for ActionWithBodyRequestBuilder<B> {
    fn clone(&self) -> Self {
        ActionWithBodyRequestBuilder {
            base: self.base.clone(),
            _body: PhantomData,
        }
    }
}

impl<B: Serialize> ActionWithBodyRequestBuilder<B> {
    /// The action at `url_template` below `parent`.
    pub fn new(parent: &BaseRequestBuilder, url_template: &'static str) -> Self {
        ActionWithBodyRequestBuilder {
            base: parent.child(url_template),
            _body: PhantomData,
        }
    }

    /// Invokes the action with `body`.
    pub async fn post(&self, body: &B, config: Option<RequestConfiguration>) -> Result<()> {
        self.base.post_no_content(Some(body), config).await
    }

    /// The request `post` would send.
    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_with_body(Method::POST, body, config)
    }
}

// ── Body and result ──────────────────────────────────────────────────

/// Builder for an action that takes a `B` body and returns an `R`.
#[derive(Debug)]
pub struct ActionWithResponseRequestBuilder<B, R> {
    base: BaseRequestBuilder,
    _types: PhantomData<fn(&B) -> R>,
}

impl<B, R> Clone for ActionWithResponseRequestBuilder<B, R> {
    fn clone(&self) -> Self {
        ActionWithResponseRequestBuilder {
            base: self.base.clone(),
            _types: PhantomData,
        }
    }
}

impl<B: Serialize, R: DeserializeOwned> ActionWithResponseRequestBuilder<B, R> {
    /// The action at `url_template` below `parent`.
    pub fn new(parent: &BaseRequestBuilder, url_template: &'static str) -> Self {
        ActionWithResponseRequestBuilder {
            base: parent.child(url_template),
            _types: PhantomData,
        }
    }

    /// Invokes the action with `body` and decodes the result.
    pub async fn post(&self, body: &B, config: Option<RequestConfiguration>) -> Result<Option<R>> {
        self.base.post(body, config).await
    }

    /// The request `post` would send.
    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_with_body(Method::POST, body, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::StubAdapter;
    use crate::models::{CollectionResponse, DeviceConfigurationAssignment};
    use crate::request::PathParameters;
    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use std::sync::Arc;

    fn device(stub: Arc<StubAdapter>) -> BaseRequestBuilder {
        let mut params = PathParameters::new();
        params.insert("managedDevice%2Did".to_string(), "dev-1".to_string());
        BaseRequestBuilder::new(
            stub,
            "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}",
            params,
        )
    }

    #[tokio::test]
    async fn parameterless_action_posts_without_body() {
        let stub = StubAdapter::new(204, None, "");
        ActionRequestBuilder::new(
            &device(stub.clone()),
            "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/rebootNow",
        )
        .post(None)
        .await
        .unwrap();

        let sent = stub.last();
        assert_eq!(sent.method, Method::POST);
        assert!(sent.content.is_none());
        assert_eq!(sent.headers[ACCEPT], "application/json");
        assert_eq!(
            sent.uri().unwrap().path(),
            "/v1.0/deviceManagement/managedDevices/dev-1/rebootNow"
        );
    }

    #[tokio::test]
    async fn body_action_serializes_json() {
        let stub = StubAdapter::new(204, None, "");
        ActionWithBodyRequestBuilder::<serde_json::Value>::new(
            &device(stub.clone()),
            "{+baseurl}/deviceManagement/managedDevices/{managedDevice%2Did}/wipe",
        )
        .post(&serde_json::json!({"keepUserData": true}), None)
        .await
        .unwrap();

        let sent = stub.last();
        assert_eq!(sent.headers[CONTENT_TYPE], "application/json");
        assert_eq!(sent.content.as_deref(), Some(&br#"{"keepUserData":true}"#[..]));
    }

    #[tokio::test]
    async fn response_action_decodes_result() {
        let stub = StubAdapter::new(
            200,
            Some("application/json"),
            r#"{"value":[{"id":"asg-1"}]}"#,
        );
        let out = ActionWithResponseRequestBuilder::<
            serde_json::Value,
            CollectionResponse<DeviceConfigurationAssignment>,
        >::new(&device(stub), "{+baseurl}/x/assign")
        .post(&serde_json::json!({"assignments": []}), None)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(out.value[0].id.as_deref(), Some("asg-1"));
    }

    #[tokio::test]
    async fn failed_action_surfaces_odata_error() {
        let stub = StubAdapter::new(
            400,
            Some("application/json"),
            r#"{"error":{"code":"BadRequest","message":"Device is not supported"}}"#,
        );
        let err = ActionRequestBuilder::new(&device(stub), "{+baseurl}/x/locateDevice")
            .post(None)
            .await
            .unwrap_err();
        assert_eq!(err.odata().unwrap().error.code, "BadRequest");
    }
}
