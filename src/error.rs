//! Typed error hierarchy for the graph-devmgmt crate.
//!
//! `GraphError` covers every boundary a request crosses on its way to
//! Microsoft Graph and back:
//! - Building the request (`InvalidRequest`): URL template expansion,
//!   header values, query-parameter serialization.
//! - Acquiring a token (`Auth`): the Microsoft identity platform endpoint.
//! - Talking to the service (`Network`): DNS, TCP, TLS, timeouts.
//! - Interpreting the answer: mapped OData errors (`OData`), unmapped or
//!   bodiless failures (`Api`), undecodable payloads (`Parse`,
//!   `UnexpectedContent`).
//!
//! Every 4xx/5xx response ends up as either `OData` (the error-mapping table
//! produced a typed error) or `Api` (nothing was registered for that status,
//! or the service sent no body to decode).

use reqwest::StatusCode;

use crate::models::ODataError;

/// Unified error type for all graph-devmgmt operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The request could not be constructed.
    ///
    /// Raised before anything is sent: a malformed URL template, an
    /// expanded URL that does not parse, an invalid header name or value,
    /// or a query struct that does not serialize to a flat record.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Graph returned a 4xx/5xx status and the body decoded as an OData
    /// error through the operation's error mappings.
    #[error("Graph error {status}: {error}")]
    OData {
        /// HTTP status code of the failed response.
        status: StatusCode,
        /// The decoded OData error payload.
        error: Box<ODataError>,
    },

    /// Graph returned a 4xx/5xx status that could not be mapped to a typed
    /// error, either because no factory is registered for the status or
    /// because the response carried no body.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code of the failed response.
        status: StatusCode,
        /// Description of why the failure could not be mapped.
        message: String,
    },

    /// Authentication failure at the Microsoft identity platform token
    /// endpoint. The message carries the AADSTS body when one was returned.
    #[error("authentication failed: {message}")]
    Auth {
        /// Human-readable description of the authentication failure.
        message: String,
        /// The underlying transport or parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON deserialization failed for a success or error payload.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried a body in a content type the operation cannot
    /// decode (e.g. HTML from a proxy where JSON was expected).
    #[error("unexpected response content ({content_type}): {message}")]
    UnexpectedContent {
        /// Primary media type of the response.
        content_type: String,
        /// What went wrong while decoding it.
        message: String,
    },

    /// A network-level failure occurred before a status code was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configuration file is missing, unreadable or invalid.
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
        /// The underlying I/O or TOML error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Returns the HTTP status for errors that came from a service response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GraphError::OData { status, .. } | GraphError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the decoded OData error, if this failure carried one.
    pub fn odata(&self) -> Option<&ODataError> {
        match self {
            GraphError::OData { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MainError;
    use std::error::Error;

    fn not_found() -> ODataError {
        ODataError {
            error: MainError {
                code: "ResourceNotFound".to_string(),
                message: "Resource not found for the segment 'managedDevices'.".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn odata_error_displays_status_code_and_message() {
        let err = GraphError::OData {
            status: StatusCode::NOT_FOUND,
            error: Box::new(not_found()),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"), "display should include status code");
        assert!(
            msg.contains("ResourceNotFound"),
            "display should include the OData error code"
        );
        assert!(msg.contains("managedDevices"));
    }

    #[test]
    fn status_is_exposed_for_service_errors_only() {
        let odata = GraphError::OData {
            status: StatusCode::NOT_FOUND,
            error: Box::new(not_found()),
        };
        assert_eq!(odata.status(), Some(StatusCode::NOT_FOUND));
        assert!(odata.odata().is_some());

        let api = GraphError::Api {
            status: StatusCode::BAD_GATEWAY,
            message: "no response body".to_string(),
        };
        assert_eq!(api.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(api.odata().is_none());

        let invalid = GraphError::InvalidRequest("unterminated expression".to_string());
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn auth_error_with_source_chains_correctly() {
        let json_err: serde_json::Error = serde_json::from_str::<String>("not-json").unwrap_err();
        let err = GraphError::Auth {
            message: "failed to parse token response".to_string(),
            source: Some(Box::new(json_err)),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn parse_error_wraps_serde_json() {
        let json_err: serde_json::Error =
            serde_json::from_str::<String>("{{bad json}}").unwrap_err();
        let err = GraphError::Parse(json_err);
        assert!(err.to_string().contains("failed to parse response"));
        assert!(err.source().is_some());
    }

    #[test]
    fn unexpected_content_names_the_media_type() {
        let err = GraphError::UnexpectedContent {
            content_type: "text/html".to_string(),
            message: "cannot decode as JSON".to_string(),
        };
        assert!(err.to_string().contains("text/html"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphError>();
    }
}
