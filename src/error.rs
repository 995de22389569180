//! Error types for Cloud Foundry API operations.

use thiserror::Error;

/// Errors that can occur during Cloud Foundry API operations.
#[derive(Debug, Error)]
pub enum CfError {
    /// Configuration is missing or incomplete.
    #[error("Cloud Foundry configuration required: {0}")]
    ConfigMissing(String),

    /// A path template placeholder has no value on the request.
    #[error("Request is missing path parameter '{name}' required by '{template}'")]
    MissingPathParameter {
        name: String,
        template: &'static str,
    },

    /// A required request field was not set.
    #[error("Request is missing required field '{0}'")]
    MissingField(&'static str),

    /// The operation is not available for this resource type.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// The platform answered with an error payload.
    #[error("Cloud Foundry error {code} ({error_code}): {description}")]
    Server {
        status: u16,
        code: i64,
        description: String,
        error_code: String,
    },

    /// The status/body combination matches no known response shape.
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON (de)serialization error.
    #[error("Failed to serialize or parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl CfError {
    /// Whether the error was detected before any network call was made.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            CfError::MissingPathParameter { .. } | CfError::MissingField(_)
        )
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CfError::Server { status, .. } | CfError::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
            CfError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Cloud Foundry operations.
pub type Result<T> = core::result::Result<T, CfError>;
