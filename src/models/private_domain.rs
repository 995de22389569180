//! Private domain model and trait implementations.
//!
//! Private domains belong to one organization and may be shared with
//! others. They support create, get, list and (optionally async) delete.

use serde::{Deserialize, Serialize};

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::filter::FilterParameter;
use crate::http::HttpMethod;
use crate::models::OrganizationResource;
use crate::pagination::{PageCursor, PaginatedResponse};
use crate::request::{json_body, require, ApiRequest};
use crate::response::Resource;
use crate::traits::{Create, Delete, Get, List, PaginatedRequest};

/// The entity of a private domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateDomainEntity {
    /// The domain name (e.g., "example.com").
    #[serde(default)]
    pub name: String,

    /// GUID of the owning organization.
    #[serde(rename = "owning_organization_guid", default)]
    pub owning_organization_id: Option<String>,

    /// URL of the owning organization.
    #[serde(default)]
    pub owning_organization_url: Option<String>,

    /// URL listing the organizations the domain is shared with.
    #[serde(default)]
    pub shared_organizations_url: Option<String>,
}

/// A private domain with its metadata.
pub type PrivateDomainResource = Resource<PrivateDomainEntity>;

/// Request to create a private domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePrivateDomainRequest {
    /// The domain name.
    pub name: String,

    /// GUID of the organization that will own the domain.
    #[serde(rename = "owning_organization_guid")]
    pub owning_organization_id: String,
}

impl CreatePrivateDomainRequest {
    pub fn new(name: impl Into<String>, owning_organization_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owning_organization_id: owning_organization_id.into(),
        }
    }
}

impl ApiRequest for CreatePrivateDomainRequest {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/v2/private_domains";

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("owning_organization_guid", &self.owning_organization_id)
    }

    fn body(&self) -> Result<Option<String>> {
        json_body(self)
    }
}

/// Request for a single private domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPrivateDomainRequest {
    /// The private domain GUID.
    pub private_domain_id: String,
}

impl GetPrivateDomainRequest {
    pub fn new(private_domain_id: impl Into<String>) -> Self {
        Self {
            private_domain_id: private_domain_id.into(),
        }
    }
}

impl ApiRequest for GetPrivateDomainRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/private_domains/{private_domain_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "private_domain_guid").then_some(self.private_domain_id.as_str())
    }
}

/// Request to delete a private domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePrivateDomainRequest {
    /// The private domain GUID.
    pub private_domain_id: String,

    /// Run the deletion as a background job.
    pub asynchronous: bool,
}

impl DeletePrivateDomainRequest {
    pub fn new(private_domain_id: impl Into<String>) -> Self {
        Self {
            private_domain_id: private_domain_id.into(),
            asynchronous: false,
        }
    }

    #[must_use]
    pub fn with_async(mut self, asynchronous: bool) -> Self {
        self.asynchronous = asynchronous;
        self
    }
}

impl ApiRequest for DeletePrivateDomainRequest {
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/v2/private_domains/{private_domain_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "private_domain_guid").then_some(self.private_domain_id.as_str())
    }

    fn is_async(&self) -> bool {
        self.asynchronous
    }
}

/// Request to list private domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPrivateDomainsRequest {
    /// Domain names to match (`name IN ...`).
    pub names: Vec<String>,

    /// Pagination controls.
    pub cursor: PageCursor,
}

impl ListPrivateDomainsRequest {
    /// Add a name to the `name` filter.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Request a specific page.
    #[must_use]
    pub fn with_page(mut self, page: i32) -> Self {
        self.cursor.page = Some(page);
        self
    }
}

impl ApiRequest for ListPrivateDomainsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/private_domains";

    fn filters(&self) -> Vec<FilterParameter> {
        vec![FilterParameter::is_in("name", &self.names)]
    }

    fn page_cursor(&self) -> Option<&PageCursor> {
        Some(&self.cursor)
    }
}

impl PaginatedRequest for ListPrivateDomainsRequest {
    fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }
}

/// Request to list the organizations a private domain is shared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPrivateDomainSharedOrganizationsRequest {
    /// The private domain GUID.
    pub private_domain_id: String,

    /// Organization names to match (`name IN ...`).
    pub names: Vec<String>,

    /// Pagination controls.
    pub cursor: PageCursor,
}

impl ListPrivateDomainSharedOrganizationsRequest {
    pub fn new(private_domain_id: impl Into<String>) -> Self {
        Self {
            private_domain_id: private_domain_id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for ListPrivateDomainSharedOrganizationsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/private_domains/{private_domain_guid}/shared_organizations";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "private_domain_guid").then_some(self.private_domain_id.as_str())
    }

    fn filters(&self) -> Vec<FilterParameter> {
        vec![FilterParameter::is_in("name", &self.names)]
    }

    fn page_cursor(&self) -> Option<&PageCursor> {
        Some(&self.cursor)
    }
}

impl Get for PrivateDomainResource {
    type Request = GetPrivateDomainRequest;
}

impl List for PrivateDomainResource {
    type Request = ListPrivateDomainsRequest;
}

impl Create for PrivateDomainResource {
    type Request = CreatePrivateDomainRequest;
}

impl Delete for PrivateDomainResource {
    type Request = DeletePrivateDomainRequest;
}

// Convenience functions for working with private domains

/// Fetch every private domain matching the request, across all pages.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, get_private_domains, ListPrivateDomainsRequest};
///
/// let client = CloudFoundryClient::from_env()?;
/// let domains = get_private_domains(&client, &ListPrivateDomainsRequest::default()).await?;
/// ```
pub async fn get_private_domains(
    client: &CloudFoundryClient,
    request: &ListPrivateDomainsRequest,
) -> Result<Vec<PrivateDomainResource>> {
    Ok(PrivateDomainResource::list_all(client, request)
        .await?
        .resources)
}

/// Fetch one page of the organizations a private domain is shared with.
#[tracing::instrument(skip(client))]
pub async fn list_shared_organizations(
    client: &CloudFoundryClient,
    request: &ListPrivateDomainSharedOrganizationsRequest,
) -> Result<PaginatedResponse<OrganizationResource>> {
    client.fetch(request).await
}
