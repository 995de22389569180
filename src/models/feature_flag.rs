//! Feature flag model.
//!
//! Feature flags are not metadata/entity resources: each flag is a flat
//! object, and the list endpoint answers with a bare JSON array rather than
//! a paginated collection.

use serde::{Deserialize, Serialize};

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{json_body, require, ApiRequest};
use crate::traits::{Get, Update};

/// A platform feature flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    /// The flag name (e.g., "user_org_creation").
    #[serde(default)]
    pub name: String,

    /// Whether the feature is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Whether the value differs from the platform default.
    #[serde(default)]
    pub overridden: bool,

    /// The platform default.
    #[serde(default)]
    pub default_value: Option<bool>,

    /// Message returned when a disabled feature is used.
    #[serde(default)]
    pub error_message: Option<String>,

    /// URL of the flag.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request for a single feature flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFeatureFlagRequest {
    /// The flag name.
    pub name: String,
}

impl GetFeatureFlagRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ApiRequest for GetFeatureFlagRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/config/feature_flags/{name}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "name").then_some(self.name.as_str())
    }
}

/// Request for all feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFeatureFlagsRequest;

impl ApiRequest for ListFeatureFlagsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/config/feature_flags";
}

/// Request to enable or disable a feature flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetFeatureFlagRequest {
    /// The flag name.
    #[serde(skip)]
    pub name: String,

    /// The new value.
    pub enabled: bool,

    /// Custom message for uses of the disabled feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SetFeatureFlagRequest {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
            error_message: None,
        }
    }
}

impl ApiRequest for SetFeatureFlagRequest {
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/v2/config/feature_flags/{name}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "name").then_some(self.name.as_str())
    }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }

    fn body(&self) -> Result<Option<String>> {
        json_body(self)
    }
}

impl Get for FeatureFlag {
    type Request = GetFeatureFlagRequest;
}

/// Setting a flag is an update of the flag resource.
impl Update for FeatureFlag {
    type Request = SetFeatureFlagRequest;
}

impl FeatureFlag {
    /// Fetch every feature flag.
    #[tracing::instrument(skip(client))]
    pub async fn list(
        client: &CloudFoundryClient,
        request: &ListFeatureFlagsRequest,
    ) -> Result<Vec<FeatureFlag>> {
        client.fetch(request).await
    }
}
