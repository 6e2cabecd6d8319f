//! CI validation for the endpoint manifest (manifest/endpoints.toml).
//!
//! The manifest records the Graph contract (method, URL template, expected
//! status, permissions) independently of the code. These tests check that it
//! is well-formed and that it agrees exactly with `catalog::endpoints()`,
//! which is built from the template constants the request builders use.

use std::collections::BTreeMap;

use serde::Deserialize;

use graph_devmgmt::catalog;

/// Top-level manifest structure matching the TOML schema.
#[derive(Debug, Deserialize)]
struct Manifest {
    meta: Meta,
    endpoints: Vec<Endpoint>,
}

/// Manifest metadata: schema version, API version and last validation date.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Meta {
    schema_version: u32,
    last_validated: String,
    api_version: String,
}

/// A single endpoint entry in the manifest.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Endpoint {
    family: String,
    name: String,
    method: String,
    path: String,
    request_content_type: String,
    response_status: u16,
    permissions: Vec<String>,
    implemented: bool,
    #[serde(default)]
    notes: String,
}

fn load() -> Manifest {
    let content = std::fs::read_to_string("manifest/endpoints.toml")
        .expect("manifest/endpoints.toml should exist and be readable");
    toml::from_str(&content).expect("manifest/endpoints.toml should be valid TOML")
}

#[test]
fn manifest_endpoints_toml_is_valid() {
    let manifest = load();

    assert!(
        manifest.meta.schema_version >= 1,
        "schema_version must be at least 1"
    );
    assert_eq!(manifest.meta.api_version, "v1.0");
    assert!(
        !manifest.endpoints.is_empty(),
        "manifest should contain at least one endpoint"
    );

    for ep in &manifest.endpoints {
        assert!(!ep.family.is_empty(), "endpoint family must not be empty");
        assert!(!ep.name.is_empty(), "endpoint name must not be empty");
        assert!(!ep.path.is_empty(), "endpoint path must not be empty");
        assert!(
            !ep.permissions.is_empty(),
            "endpoint '{}.{}' must list at least one permission",
            ep.family,
            ep.name
        );
    }
}

#[test]
fn manifest_endpoint_methods_are_valid_http_verbs() {
    let valid_methods = ["GET", "POST", "PUT", "PATCH", "DELETE"];
    for ep in &load().endpoints {
        assert!(
            valid_methods.contains(&ep.method.as_str()),
            "endpoint '{}' has invalid method '{}', expected one of {:?}",
            ep.name,
            ep.method,
            valid_methods
        );
    }
}

#[test]
fn bodies_are_declared_only_where_sent() {
    for ep in &load().endpoints {
        match ep.method.as_str() {
            "GET" | "DELETE" => assert_eq!(
                ep.request_content_type, "none",
                "{}.{} must not declare a body",
                ep.family, ep.name
            ),
            "PATCH" => assert_eq!(ep.request_content_type, "application/json"),
            _ => {}
        }
        if ep.method == "DELETE" {
            assert_eq!(ep.response_status, 204, "{}.{}", ep.family, ep.name);
        }
    }
}

#[test]
fn manifest_matches_catalog() {
    let manifest = load();

    let mut expected: BTreeMap<(String, String), (String, String)> = BTreeMap::new();
    for ep in &manifest.endpoints {
        assert!(ep.implemented, "{}.{} is not implemented", ep.family, ep.name);
        let previous = expected.insert(
            (ep.family.clone(), ep.name.clone()),
            (ep.method.clone(), ep.path.clone()),
        );
        assert!(
            previous.is_none(),
            "duplicate manifest entry {}.{}",
            ep.family,
            ep.name
        );
    }

    let actual: BTreeMap<(String, String), (String, String)> = catalog::endpoints()
        .into_iter()
        .map(|ep| {
            (
                (ep.family.to_string(), ep.name.to_string()),
                (ep.method.to_string(), ep.url_template.to_string()),
            )
        })
        .collect();

    for (key, value) in &expected {
        assert_eq!(
            actual.get(key),
            Some(value),
            "catalog disagrees with manifest for {}.{}",
            key.0,
            key.1
        );
    }
    for key in actual.keys() {
        assert!(
            expected.contains_key(key),
            "{}.{} is implemented but missing from the manifest",
            key.0,
            key.1
        );
    }
}

#[test]
fn managed_device_remote_actions_are_all_present() {
    let manifest = load();
    let names: Vec<&str> = manifest
        .endpoints
        .iter()
        .filter(|ep| ep.family == "deviceManagement.managedDevices" && ep.method == "POST")
        .map(|ep| ep.name.as_str())
        .collect();

    for expected in [
        "retire",
        "wipe",
        "rebootNow",
        "syncDevice",
        "remoteLock",
        "shutDown",
        "windowsDefenderScan",
        "cleanWindowsDevice",
    ] {
        assert!(
            names.contains(&expected),
            "remote action '{expected}' should be in the manifest"
        );
    }
}
