//! Service instance model and trait implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::filter::{FilterParameter, QueryString};
use crate::http::HttpMethod;
use crate::pagination::{PageCursor, PaginatedResponse};
use crate::request::{json_body, ApiRequest};
use crate::response::Resource;
use crate::traits::{Delete, Get, List, PaginatedRequest, Update};

/// The entity of a service instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstanceEntity {
    /// The instance name.
    #[serde(default)]
    pub name: String,

    /// Credentials of user-provided instances.
    #[serde(default)]
    pub credentials: Option<serde_json::Value>,

    /// GUID of the service plan.
    #[serde(rename = "service_plan_guid", default)]
    pub service_plan_id: Option<String>,

    /// GUID of the space.
    #[serde(rename = "space_guid", default)]
    pub space_id: Option<String>,

    /// Broker dashboard URL.
    #[serde(default)]
    pub dashboard_url: Option<String>,

    /// Instance type (e.g., "managed_service_instance").
    #[serde(rename = "type", default)]
    pub instance_type: Option<String>,

    /// The last broker operation on the instance.
    #[serde(default)]
    pub last_operation: Option<LastOperation>,

    /// User-defined tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// URL of the space.
    #[serde(default)]
    pub space_url: Option<String>,

    /// URL of the service plan.
    #[serde(default)]
    pub service_plan_url: Option<String>,

    /// URL listing the instance's bindings.
    #[serde(default)]
    pub service_bindings_url: Option<String>,

    /// URL listing the instance's keys.
    #[serde(default)]
    pub service_keys_url: Option<String>,

    /// URL listing the routes bound to the instance.
    #[serde(default)]
    pub routes_url: Option<String>,
}

/// State of the last broker operation on a service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastOperation {
    /// Operation kind ("create", "update", "delete").
    #[serde(rename = "type", default)]
    pub operation_type: Option<String>,

    /// Operation state ("in progress", "succeeded", "failed").
    #[serde(default)]
    pub state: Option<String>,

    /// Broker-provided description.
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A service instance with its metadata.
pub type ServiceInstanceResource = Resource<ServiceInstanceEntity>;

/// The entity of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntity {
    /// Host part of the route.
    #[serde(default)]
    pub host: String,

    /// Path part of the route.
    #[serde(default)]
    pub path: String,

    /// TCP port, for TCP routes.
    #[serde(default)]
    pub port: Option<u16>,

    /// GUID of the route's domain.
    #[serde(rename = "domain_guid", default)]
    pub domain_id: Option<String>,

    /// GUID of the route's space.
    #[serde(rename = "space_guid", default)]
    pub space_id: Option<String>,

    /// GUID of the bound service instance.
    #[serde(rename = "service_instance_guid", default)]
    pub service_instance_id: Option<String>,

    #[serde(default)]
    pub domain_url: Option<String>,

    #[serde(default)]
    pub space_url: Option<String>,

    #[serde(default)]
    pub apps_url: Option<String>,

    #[serde(default)]
    pub route_mappings_url: Option<String>,
}

/// A route with its metadata.
pub type RouteResource = Resource<RouteEntity>;

/// Request for a single service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServiceInstanceRequest {
    /// The service instance GUID.
    pub service_instance_id: String,
}

impl GetServiceInstanceRequest {
    pub fn new(service_instance_id: impl Into<String>) -> Self {
        Self {
            service_instance_id: service_instance_id.into(),
        }
    }
}

impl ApiRequest for GetServiceInstanceRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/service_instances/{service_instance_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "service_instance_guid").then_some(self.service_instance_id.as_str())
    }
}

/// Request to update a service instance.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateServiceInstanceRequest {
    /// The service instance GUID.
    #[serde(skip)]
    pub service_instance_id: String,

    /// Allow the broker to complete the update asynchronously.
    #[serde(skip)]
    pub accepts_incomplete: Option<bool>,

    /// New instance name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// GUID of the new service plan.
    #[serde(rename = "service_plan_guid", skip_serializing_if = "Option::is_none")]
    pub service_plan_id: Option<String>,

    /// Arbitrary parameters passed to the broker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,

    /// Replacement tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateServiceInstanceRequest {
    pub fn new(service_instance_id: impl Into<String>) -> Self {
        Self {
            service_instance_id: service_instance_id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for UpdateServiceInstanceRequest {
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/v2/service_instances/{service_instance_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "service_instance_guid").then_some(self.service_instance_id.as_str())
    }

    fn query_params(&self, query: &mut QueryString) {
        query.push_opt("accepts_incomplete", self.accepts_incomplete);
    }

    fn body(&self) -> Result<Option<String>> {
        json_body(self)
    }
}

/// Request to delete a service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteServiceInstanceRequest {
    /// The service instance GUID.
    pub service_instance_id: String,

    /// Run the deletion as a background job.
    pub asynchronous: bool,

    /// Allow the broker to complete the deletion asynchronously.
    pub accepts_incomplete: Option<bool>,

    /// Also delete bindings, keys and route bindings.
    pub recursive: Option<bool>,

    /// Remove the instance without contacting the broker.
    pub purge: Option<bool>,
}

impl DeleteServiceInstanceRequest {
    pub fn new(service_instance_id: impl Into<String>) -> Self {
        Self {
            service_instance_id: service_instance_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_async(mut self, asynchronous: bool) -> Self {
        self.asynchronous = asynchronous;
        self
    }
}

impl ApiRequest for DeleteServiceInstanceRequest {
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/v2/service_instances/{service_instance_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "service_instance_guid").then_some(self.service_instance_id.as_str())
    }

    fn query_params(&self, query: &mut QueryString) {
        query.push_opt("accepts_incomplete", self.accepts_incomplete);
        query.push_opt("recursive", self.recursive);
        query.push_opt("purge", self.purge);
    }

    fn is_async(&self) -> bool {
        self.asynchronous
    }
}

/// Request to list the routes bound to a service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListServiceInstanceRoutesRequest {
    /// The service instance GUID.
    pub service_instance_id: String,

    /// Domain GUIDs to match (`domain_guid IN ...`).
    pub domain_ids: Vec<String>,

    /// Hosts to match (`host IN ...`).
    pub hosts: Vec<String>,

    /// Organization GUIDs to match (`organization_guid IN ...`).
    pub organization_ids: Vec<String>,

    /// Paths to match (`path IN ...`).
    pub paths: Vec<String>,

    /// Ports to match (`port IN ...`).
    pub ports: Vec<String>,

    /// Pagination controls.
    pub cursor: PageCursor,
}

impl ListServiceInstanceRoutesRequest {
    pub fn new(service_instance_id: impl Into<String>) -> Self {
        Self {
            service_instance_id: service_instance_id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for ListServiceInstanceRoutesRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/service_instances/{service_instance_guid}/routes";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "service_instance_guid").then_some(self.service_instance_id.as_str())
    }

    fn filters(&self) -> Vec<FilterParameter> {
        vec![
            FilterParameter::is_in("domain_guid", &self.domain_ids),
            FilterParameter::is_in("host", &self.hosts),
            FilterParameter::is_in("organization_guid", &self.organization_ids),
            FilterParameter::is_in("path", &self.paths),
            FilterParameter::is_in("port", &self.ports),
        ]
    }

    fn page_cursor(&self) -> Option<&PageCursor> {
        Some(&self.cursor)
    }
}

impl PaginatedRequest for ListServiceInstanceRoutesRequest {
    fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }
}

impl Get for ServiceInstanceResource {
    type Request = GetServiceInstanceRequest;
}

impl Update for ServiceInstanceResource {
    type Request = UpdateServiceInstanceRequest;
}

impl Delete for ServiceInstanceResource {
    type Request = DeleteServiceInstanceRequest;
}

/// Routes are listed through the service instance they are bound to.
impl List for RouteResource {
    type Request = ListServiceInstanceRoutesRequest;
}

// Convenience functions for working with service instance routes

/// Fetch all routes bound to a service instance.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, get_service_instance_routes, ListServiceInstanceRoutesRequest};
///
/// let client = CloudFoundryClient::from_env()?;
/// let routes = get_service_instance_routes(
///     &client,
///     &ListServiceInstanceRoutesRequest::new("instance-guid"),
/// ).await?;
/// ```
pub async fn get_service_instance_routes(
    client: &CloudFoundryClient,
    request: &ListServiceInstanceRoutesRequest,
) -> Result<Vec<RouteResource>> {
    Ok(RouteResource::list_all(client, request).await?.resources)
}

/// Fetch a single page of routes bound to a service instance.
pub async fn get_service_instance_routes_page(
    client: &CloudFoundryClient,
    request: &ListServiceInstanceRoutesRequest,
) -> Result<PaginatedResponse<RouteResource>> {
    RouteResource::list_page(client, request).await
}
