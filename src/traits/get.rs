//! Get trait for fetching single resources.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::request::ApiRequest;

/// Fetch a single resource.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, Get, GetPrivateDomainRequest, PrivateDomainResource};
///
/// let client = CloudFoundryClient::from_env()?;
/// let domain = PrivateDomainResource::get(
///     &client,
///     GetPrivateDomainRequest::new("3de9db5f-8e3b-4d10-a8c9-8137caafe43d"),
/// ).await?;
/// ```
#[async_trait]
pub trait Get: DeserializeOwned + Send + Sized {
    /// The request naming the resource.
    type Request: ApiRequest;

    /// Fetch the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is incomplete, the transport fails,
    /// or the server reports an error.
    async fn get(client: &CloudFoundryClient, request: Self::Request) -> Result<Self> {
        client.fetch(&request).await
    }
}
