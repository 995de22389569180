//! Response deserialization.
//!
//! Successful bodies come in two shapes: a singular resource
//! (`metadata` + `entity`) and a paginated collection (`total_results`,
//! `total_pages`, `resources`). Both are plain serde types; the target type
//! picked by the caller decides which shape is expected. Unknown fields are
//! ignored and absent optional fields take their defaults.
//!
//! Error statuses carrying the platform error body become
//! [`CfError::Server`]; anything that fits no shape becomes
//! [`CfError::UnexpectedResponse`] with the raw status and body.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CfError, Result};
use crate::http::HttpResponse;

/// Identifier/URL/timestamp envelope shared by every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// The resource GUID.
    #[serde(rename = "guid", default)]
    pub id: String,

    /// Canonical URL of the resource, relative to the API root.
    #[serde(default)]
    pub url: String,

    /// When the resource was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the resource was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A server-managed resource: metadata plus the resource-specific entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

impl<E> Resource<E> {
    /// The resource GUID.
    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}

/// The platform's error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Numeric platform error code.
    #[serde(default)]
    pub code: i64,

    /// Human readable description.
    #[serde(default)]
    pub description: String,

    /// Symbolic error code, e.g. `CF-DomainNotFound`.
    #[serde(default)]
    pub error_code: String,
}

/// Whether `status` is a success status that carries a resource body.
pub(crate) fn is_ok_with_body(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Decode a successful resource or collection body into `T`.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if is_ok_with_body(response.status) {
        parse_body(response)
    } else {
        Err(error_for(response))
    }
}

/// Parse the body as `T`, reporting a shape mismatch with the raw exchange.
pub(crate) fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::debug!(status = response.status, error = %e, "response body does not match");
        unexpected(response)
    })
}

/// The error that describes a response the caller cannot use.
pub fn error_for(response: &HttpResponse) -> CfError {
    if response.status >= 400 {
        if let Ok(payload) = serde_json::from_str::<ErrorPayload>(&response.body) {
            if !payload.error_code.is_empty() || !payload.description.is_empty() {
                return CfError::Server {
                    status: response.status,
                    code: payload.code,
                    description: payload.description,
                    error_code: payload.error_code,
                };
            }
        }
    }
    unexpected(response)
}

pub(crate) fn unexpected(response: &HttpResponse) -> CfError {
    CfError::UnexpectedResponse {
        status: response.status,
        body: response.body.clone(),
    }
}
