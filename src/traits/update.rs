//! Update trait for modifying resources.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::resolve::Completion;

/// Update an existing resource.
///
/// Only the fields set on the request are sent; everything else is left
/// unchanged on the server.
#[async_trait]
pub trait Update: DeserializeOwned + Send + Sized {
    /// The update request.
    type Request: ApiRequest;

    /// Update the resource and return the updated version, or the job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is incomplete, the transport fails,
    /// or the response matches no expected shape.
    async fn update(client: &CloudFoundryClient, request: Self::Request) -> Result<Completion<Self>> {
        client.mutate(&request).await
    }
}
