//! Delete trait for removing resources.

use async_trait::async_trait;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::resolve::Completion;

/// Delete a resource.
///
/// A synchronous delete answers `Completion::Empty`; with the request's
/// async flag set the server queues a job and `Completion::Job` is returned.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, Delete, DeletePrivateDomainRequest, PrivateDomainResource};
///
/// let client = CloudFoundryClient::from_env()?;
/// let outcome = PrivateDomainResource::delete(
///     &client,
///     DeletePrivateDomainRequest::new("domain-guid").with_async(true),
/// ).await?;
/// if let Some(job) = outcome.job() {
///     println!("queued as job {}", job.id());
/// }
/// ```
#[async_trait]
pub trait Delete: Sized {
    /// The deletion request.
    type Request: ApiRequest;

    /// Delete the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is incomplete, the transport fails,
    /// or the response matches no expected shape.
    async fn delete(client: &CloudFoundryClient, request: Self::Request) -> Result<Completion<()>> {
        client.mutate(&request).await
    }
}
