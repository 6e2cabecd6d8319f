//! The OData error payload Graph returns with every 4xx/5xx response.
//!
//! ```json
//! {
//!   "error": {
//!     "code": "ResourceNotFound",
//!     "message": "Resource not found.",
//!     "innerError": { "request-id": "…", "date": "…" }
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// Top-level OData error envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    /// The error details.
    #[serde(default)]
    pub error: MainError,
}

impl ODataError {
    /// Decodes an OData error from a raw JSON body.
    ///
    /// This is the default error factory registered for every status class
    /// by [`crate::adapter::ErrorMappings::odata`].
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// The Graph request id, when the service reported one.
    pub fn request_id(&self) -> Option<&str> {
        self.error
            .inner_error
            .as_ref()
            .and_then(|inner| inner.request_id.as_deref())
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code, self.error.message)
    }
}

/// The `error` object of an OData error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainError {
    /// Service-defined error code, e.g. `"Request_ResourceNotFound"`.
    #[serde(default)]
    pub code: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// The target of the error, when the service names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Nested per-item errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,

    /// Diagnostic envelope with the request id and server timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// One entry of `error.details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Detail error code.
    #[serde(default)]
    pub code: String,
    /// Detail message.
    #[serde(default)]
    pub message: String,
    /// Detail target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// `error.innerError`; key names are kebab-case on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    /// Server-side request id.
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Client request id echoed back by the service.
    #[serde(
        rename = "client-request-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_request_id: Option<String>,

    /// Server timestamp of the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Any other diagnostic properties.
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

additional_data_holder!(MainError, ErrorDetails, InnerError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_graph_error_with_inner_error() {
        let body = br#"{
            "error": {
                "code": "Request_ResourceNotFound",
                "message": "Resource 'abc' does not exist.",
                "innerError": {
                    "date": "2024-05-01T10:00:00",
                    "request-id": "b3a1-req",
                    "client-request-id": "b3a1-client"
                }
            }
        }"#;
        let err = ODataError::from_json(body).unwrap();
        assert_eq!(err.error.code, "Request_ResourceNotFound");
        assert_eq!(err.request_id(), Some("b3a1-req"));
        let inner = err.error.inner_error.as_ref().unwrap();
        assert_eq!(inner.client_request_id.as_deref(), Some("b3a1-client"));
        assert_eq!(inner.date.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn keeps_unmodelled_properties() {
        let body = br#"{"error": {"code": "x", "message": "y", "retryAfterSeconds": 5}}"#;
        let err = ODataError::from_json(body).unwrap();
        assert_eq!(err.error.additional_data["retryAfterSeconds"], 5);
    }

    #[test]
    fn decodes_details() {
        let body = br#"{"error": {"code": "BadRequest", "message": "Invalid",
            "details": [{"code": "InvalidValue", "message": "displayName", "target": "displayName"}]}}"#;
        let err = ODataError::from_json(body).unwrap();
        assert_eq!(err.error.details.len(), 1);
        assert_eq!(err.error.details[0].target.as_deref(), Some("displayName"));
    }

    #[test]
    fn display_is_code_and_message() {
        let err = ODataError {
            error: MainError {
                code: "Forbidden".to_string(),
                message: "Insufficient privileges".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(err.to_string(), "Forbidden: Insufficient privileges");
        assert_eq!(err.request_id(), None);
    }
}
