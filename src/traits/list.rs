//! List trait for fetching paginated collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::pagination::{aggregate, PageCursor, PaginatedResponse};
use crate::request::ApiRequest;

/// A list request whose page can be moved.
pub trait PaginatedRequest: ApiRequest + Clone {
    /// The pagination controls of the request.
    fn cursor_mut(&mut self) -> &mut PageCursor;
}

/// List/filter resources with pagination support.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, List, ListPrivateDomainsRequest, PrivateDomainResource};
///
/// let client = CloudFoundryClient::from_env()?;
/// let request = ListPrivateDomainsRequest::default().with_name("example.com");
///
/// // Fetch a single page
/// let page = PrivateDomainResource::list_page(&client, &request).await?;
///
/// // Fetch all pages
/// let all = PrivateDomainResource::list_all(&client, &request).await?;
/// ```
#[async_trait]
pub trait List: DeserializeOwned + Send + Sized {
    /// The list request carrying filters and pagination.
    type Request: PaginatedRequest;

    /// Fetch the page the request points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page(
        client: &CloudFoundryClient,
        request: &Self::Request,
    ) -> Result<PaginatedResponse<Self>> {
        client.fetch(request).await
    }

    /// Fetch the requested page and every page after it.
    ///
    /// Pages are fetched one at a time, following the server's
    /// `next_url`. The totals are taken from the last page.
    ///
    /// # Errors
    ///
    /// Returns the first error of any page request.
    async fn list_all(
        client: &CloudFoundryClient,
        request: &Self::Request,
    ) -> Result<PaginatedResponse<Self>> {
        let start = request.page_cursor().and_then(|c| c.page);
        aggregate(start, |page| {
            let mut next = request.clone();
            next.cursor_mut().page = Some(page);
            async move { client.fetch::<_, PaginatedResponse<Self>>(&next).await }
        })
        .await
    }
}
