//! Cloud Foundry v2 API client library.
//!
//! A Rust library for the Cloud Foundry v2 REST API. Typed requests are
//! turned into exact HTTP calls, and responses are turned back into typed
//! resources, paginated collections, or background-job references.
//!
//! # Quick Start
//!
//! ```no_run
//! use cfapi::{
//!     CloudFoundryClient, Completion, Create, CreatePrivateDomainRequest, Delete,
//!     DeletePrivateDomainRequest, List, ListPrivateDomainsRequest, PrivateDomainResource,
//! };
//!
//! #[tokio::main]
//! async fn main() -> cfapi::Result<()> {
//!     // Create client from environment variables
//!     let client = CloudFoundryClient::from_env()?;
//!
//!     // Create a private domain
//!     let created = PrivateDomainResource::create(
//!         &client,
//!         CreatePrivateDomainRequest::new("example.com", "org-guid"),
//!     )
//!     .await?;
//!
//!     // List every domain with that name, across all pages
//!     let request = ListPrivateDomainsRequest::default().with_name("example.com");
//!     let domains = PrivateDomainResource::list_all(&client, &request).await?;
//!     println!("Found {} domains", domains.total_results);
//!
//!     // Delete it as a background job
//!     if let Completion::Resource(domain) = created {
//!         let outcome = PrivateDomainResource::delete(
//!             &client,
//!             DeletePrivateDomainRequest::new(domain.id()).with_async(true),
//!         )
//!         .await?;
//!         if let Some(job) = outcome.job() {
//!             println!("Deletion queued as job {}", job.id());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! A call passes through a fixed pipeline:
//!
//! 1. [`request::serialize`] turns an [`ApiRequest`] into an [`HttpRequest`],
//!    using [`filter`] to encode `q` clauses and pagination parameters.
//! 2. [`CloudFoundryClient::execute`] performs the exchange.
//! 3. [`response::decode`] reads resources and collections;
//!    [`resolve::resolve`] decides whether a mutating call finished or was
//!    queued as a job.
//! 4. [`List::list_all`] repeats list calls page by page.
//!
//! Resource types implement [`Get`], [`List`], [`Create`], [`Update`] and
//! [`Delete`] for the verbs their endpoints support.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CF_API_URL` (required) - API root, e.g. `https://api.example.com`
//! - `CF_ACCESS_TOKEN` (required) - OAuth access token

mod client;
mod error;
pub mod filter;
mod http;
mod models;
pub mod pagination;
pub mod request;
pub mod resolve;
pub mod response;
mod traits;

pub mod cli;
pub mod output;

// Re-export core types
pub use client::CloudFoundryClient;
pub use error::{CfError, Result};
pub use filter::{FilterOperator, FilterParameter, QueryString};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use pagination::{OrderDirection, PageCursor, PaginatedResponse};
pub use request::ApiRequest;
pub use resolve::Completion;
pub use response::{ErrorPayload, Metadata, Resource};

// Re-export traits
pub use traits::{Create, Delete, Get, List, PaginatedRequest, Update};

// Re-export models
pub use models::{
    // Private domain types
    CreatePrivateDomainRequest,
    DeletePrivateDomainRequest,
    GetPrivateDomainRequest,
    ListPrivateDomainSharedOrganizationsRequest,
    ListPrivateDomainsRequest,
    PrivateDomainEntity,
    PrivateDomainResource,
    // Organization types
    OrganizationEntity,
    OrganizationResource,
    // Feature flag types
    FeatureFlag,
    GetFeatureFlagRequest,
    ListFeatureFlagsRequest,
    SetFeatureFlagRequest,
    // Service instance types
    DeleteServiceInstanceRequest,
    UpdateServiceInstanceRequest,
    GetServiceInstanceRequest,
    LastOperation,
    ListServiceInstanceRoutesRequest,
    RouteEntity,
    RouteResource,
    ServiceInstanceEntity,
    ServiceInstanceResource,
    // Job types
    GetJobRequest,
    JobEntity,
    JobResource,
    JobStatus,
};

// Re-export convenience functions
pub use models::{get_private_domains, list_shared_organizations};
pub use models::{get_service_instance_routes, get_service_instance_routes_page};
