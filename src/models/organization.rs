//! Organization model.
//!
//! Organizations only appear here as the targets of shared-domain listings.

use serde::{Deserialize, Serialize};

use crate::response::Resource;

/// The entity of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationEntity {
    /// The organization name.
    #[serde(default)]
    pub name: String,

    /// Lifecycle status (e.g., "active", "suspended").
    #[serde(default)]
    pub status: Option<String>,

    /// Whether billing is enabled.
    #[serde(default)]
    pub billing_enabled: bool,

    /// GUID of the quota definition.
    #[serde(rename = "quota_definition_guid", default)]
    pub quota_definition_id: Option<String>,

    /// URL listing the organization's spaces.
    #[serde(default)]
    pub spaces_url: Option<String>,

    /// URL listing the organization's private domains.
    #[serde(default)]
    pub private_domains_url: Option<String>,
}

/// An organization with its metadata.
pub type OrganizationResource = Resource<OrganizationEntity>;
