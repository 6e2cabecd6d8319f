//! Generic builders for entity sets and their members.
//!
//! Most navigation properties under `deviceManagement` are plain entity
//! sets: list, create, address one member by id, and count. The resource
//! modules wrap these builders and add their own navigation and actions.

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::builder::BaseRequestBuilder;
use crate::error::Result;
use crate::models::CollectionResponse;
use crate::query::{CollectionQueryParameters, CountQueryParameters, ItemQueryParameters};
use crate::request::{RequestConfiguration, RequestInformation};

/// URL templates of one entity set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySetTemplates {
    /// The set itself, with collection query options.
    pub collection: &'static str,
    /// One member, with item query options.
    pub item: &'static str,
    /// The `$count` segment.
    pub count: &'static str,
    /// Path parameter holding the member id, e.g. `deviceCategory%2Did`.
    pub id_parameter: &'static str,
}

/// Builder for an entity set of `T`.
#[derive(Debug)]
pub struct EntityCollectionRequestBuilder<T> {
    base: BaseRequestBuilder,
    templates: &'static EntitySetTemplates,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityCollectionRequestBuilder<T> {
    fn clone(&self) -> Self {
        EntityCollectionRequestBuilder {
            base: self.base.clone(),
            templates: self.templates,
            _entity: PhantomData,
        }
    }
}

impl<T> EntityCollectionRequestBuilder<T>
where
    T: Serialize + DeserializeOwned,
{
    /// The set below `parent`.
    pub fn new(parent: &BaseRequestBuilder, templates: &'static EntitySetTemplates) -> Self {
        EntityCollectionRequestBuilder {
            base: parent.child(templates.collection),
            templates,
            _entity: PhantomData,
        }
    }

    /// The underlying builder.
    pub fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }

    /// Lists one page of the set.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<CollectionResponse<T>>> {
        self.base.get(config).await
    }

    /// Creates a member.
    pub async fn post(&self, body: &T, config: Option<RequestConfiguration>) -> Result<Option<T>> {
        self.base.post(body, config).await
    }

    /// Addresses the member with the given id.
    pub fn by_id(&self, id: &str) -> EntityItemRequestBuilder<T> {
        EntityItemRequestBuilder::new(
            self.base
                .child_with(self.templates.item, self.templates.id_parameter, id),
        )
    }

    /// The `$count` of the set.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(self.base.child(self.templates.count))
    }

    /// The same set addressed by an absolute URL, e.g. `@odata.nextLink`.
    pub fn with_url(&self, raw_url: &str) -> Self {
        EntityCollectionRequestBuilder {
            base: self.base.with_url(raw_url),
            templates: self.templates,
            _entity: PhantomData,
        }
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::GET, config)
    }

    /// The request `post` would send.
    pub fn to_post_request_information(
        &self,
        body: &T,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_with_body(Method::POST, body, config)
    }
}

/// Builder for one entity of type `T`.
#[derive(Debug)]
pub struct EntityItemRequestBuilder<T> {
    base: BaseRequestBuilder,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityItemRequestBuilder<T> {
    fn clone(&self) -> Self {
        EntityItemRequestBuilder {
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> EntityItemRequestBuilder<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Wraps a builder already pointing at the entity.
    pub fn new(base: BaseRequestBuilder) -> Self {
        EntityItemRequestBuilder {
            base,
            _entity: PhantomData,
        }
    }

    /// The underlying builder.
    pub fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }

    /// Reads the entity.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<T>> {
        self.base.get(config).await
    }

    /// Updates the entity. Only the properties set on `body` are sent.
    pub async fn patch(&self, body: &T, config: Option<RequestConfiguration>) -> Result<Option<T>> {
        self.base.patch(body, config).await
    }

    /// Deletes the entity.
    pub async fn delete(&self, config: Option<RequestConfiguration>) -> Result<()> {
        self.base.delete(config).await
    }

    /// The same entity addressed by an absolute URL.
    pub fn with_url(&self, raw_url: &str) -> Self {
        Self::new(self.base.with_url(raw_url))
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::GET, config)
    }

    /// The request `patch` would send.
    pub fn to_patch_request_information(
        &self,
        body: &T,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_with_body(Method::PATCH, body, config)
    }

    /// The request `delete` would send.
    pub fn to_delete_request_information(
        &self,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base.request_information(Method::DELETE, config)
    }
}

/// Builder for `…/$count`.
#[derive(Debug, Clone)]
pub struct CountRequestBuilder {
    base: BaseRequestBuilder,
}

impl CountRequestBuilder {
    /// Wraps a builder pointing at a `$count` segment.
    pub fn new(base: BaseRequestBuilder) -> Self {
        CountRequestBuilder { base }
    }

    /// Reads the number of members matching the optional filter/search.
    ///
    /// `$search` and `$filter` on some sets require the
    /// `ConsistencyLevel: eventual` header.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CountQueryParameters>>,
    ) -> Result<Option<i64>> {
        self.base.get_primitive(config).await
    }

    /// The request `get` would send.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<CountQueryParameters>>,
    ) -> Result<RequestInformation> {
        self.base
            .request_information_accepting(Method::GET, config, crate::builder::ACCEPT_TEXT)
    }
}
