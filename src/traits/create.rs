//! Create trait for new resources.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::resolve::Completion;

/// Create a resource.
///
/// The outcome is the created resource, or a job when the server queued
/// the work.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, Create, CreatePrivateDomainRequest, PrivateDomainResource};
///
/// let client = CloudFoundryClient::from_env()?;
/// let created = PrivateDomainResource::create(
///     &client,
///     CreatePrivateDomainRequest::new("example.com", "org-guid"),
/// ).await?;
/// ```
#[async_trait]
pub trait Create: DeserializeOwned + Send + Sized {
    /// The creation request.
    type Request: ApiRequest;

    /// Create the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is incomplete, the transport fails,
    /// or the response matches no expected shape.
    async fn create(client: &CloudFoundryClient, request: Self::Request) -> Result<Completion<Self>> {
        client.mutate(&request).await
    }
}
