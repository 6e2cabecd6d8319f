//! Async Rust client library for the Microsoft Graph `deviceManagement`
//! (Intune) API.
//!
//! Requests are described by a tree of fluent request builders rooted at
//! [`GraphServiceClient`]. Each builder owns a URL template and the path
//! parameters collected so far; terminal methods (`get`, `post`, `patch`,
//! `delete`) turn that into a [`RequestInformation`](request::RequestInformation)
//! and hand it to a [`RequestAdapter`](adapter::RequestAdapter) for
//! execution. [`GraphClient`] is the reqwest-backed adapter with OAuth2
//! client-credentials auth and a one-shot 401 retry.
//!
//! # Modules
//!
//! - [`adapter`]: the `RequestAdapter` seam, error mappings, typed send helpers.
//! - [`auth`]: OAuth2 client credentials token provider with expiry tracking.
//! - [`client`]: authenticated reqwest adapter for Graph.
//! - [`config`]: TOML configuration file loading.
//! - [`device_management`]: the `/deviceManagement` root and its children.
//! - [`managed_devices`], [`device_configurations`],
//!   [`device_compliance_policies`]: resource-specific builders.
//! - [`models`]: serde models for the resource tree.
//! - [`catalog`]: every endpoint the builders can reach, as data.
//!
//! # Quick Start
//!
//! ```ignore
//! use graph_devmgmt::auth::{TokenProvider, GRAPH_SCOPE};
//! use graph_devmgmt::query::CollectionQueryParameters;
//! use graph_devmgmt::{GraphClient, GraphServiceClient, RequestConfiguration};
//!
//! let tp = TokenProvider::new("tenant", "client_id", "secret", GRAPH_SCOPE);
//! let graph = GraphServiceClient::from(GraphClient::new(tp));
//!
//! let query = CollectionQueryParameters::default()
//!     .filter("operatingSystem eq 'Windows'")
//!     .top(10);
//! let page = graph
//!     .device_management()
//!     .managed_devices()
//!     .get(Some(RequestConfiguration::new().query(query)))
//!     .await?;
//!
//! for device in page.map(|p| p.value).unwrap_or_default() {
//!     println!("{:?}", device.device_name);
//! }
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod adapter;
pub mod auth;
pub mod builder;
pub mod catalog;
pub mod client;
pub mod collection;
pub mod config;
pub mod device_compliance_policies;
pub mod device_configurations;
pub mod device_management;
pub mod error;
pub mod managed_devices;
pub mod models;
pub mod query;
pub mod request;
pub mod service;
pub mod uri_template;

pub use client::GraphClient;
pub use error::{GraphError, Result};
pub use request::RequestConfiguration;
pub use service::GraphServiceClient;
