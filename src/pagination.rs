//! Pagination types and the multi-page aggregator.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum pages to fetch in one aggregation (safety limit).
pub const MAX_PAGES: u32 = 1000;

/// Sort order of a list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => f.write_str("asc"),
            OrderDirection::Desc => f.write_str("desc"),
        }
    }
}

/// The (page, results-per-page, ordering) controls of a list request.
///
/// Pages are 1-based on the server. The page number is signed and is
/// forwarded without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    /// Page number to request.
    pub page: Option<i32>,
    /// Number of resources per page.
    pub results_per_page: Option<u32>,
    /// Sort order.
    pub order_direction: Option<OrderDirection>,
    /// Field to sort by.
    pub order_by: Option<String>,
}

impl PageCursor {
    /// Cursor for a specific page and page size.
    #[must_use]
    pub fn for_page(page: i32, results_per_page: u32) -> Self {
        Self {
            page: Some(page),
            results_per_page: Some(results_per_page),
            ..Default::default()
        }
    }
}

/// One page of a paginated collection as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>", serialize = "R: Serialize"))]
pub struct PaginatedResponse<R> {
    /// Total number of resources across all pages.
    pub total_results: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub prev_url: Option<String>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next_url: Option<String>,
    /// The resources on this page, in server order.
    #[serde(default)]
    pub resources: Vec<R>,
}

impl<R> PaginatedResponse<R> {
    /// Whether the server announced a further page.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    /// Map the resources to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(R) -> U>(self, f: F) -> PaginatedResponse<U> {
        PaginatedResponse {
            total_results: self.total_results,
            total_pages: self.total_pages,
            prev_url: self.prev_url,
            next_url: self.next_url,
            resources: self.resources.into_iter().map(f).collect(),
        }
    }

    /// Returns true if this page has no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns the number of resources on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns an iterator over the resources on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.resources.iter()
    }
}

impl<R> IntoIterator for PaginatedResponse<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a PaginatedResponse<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// Fetch every page, starting at `start_page` (or 1), and merge them.
///
/// Pages are requested one after another: page N+1 is only fetched once
/// page N has been parsed and announced a `next_url`. Resources keep the
/// order they were received in. The totals are those of the last page
/// fetched. The first failing fetch aborts the aggregation.
///
/// Aggregation also stops, with a warning, after [`MAX_PAGES`] pages or
/// when the page number cannot be advanced any further.
pub async fn aggregate<R, F, Fut>(start_page: Option<i32>, mut fetch: F) -> Result<PaginatedResponse<R>>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<R>>>,
{
    let mut page = start_page.unwrap_or(1);
    let mut resources = Vec::new();
    let mut fetched = 0u32;

    loop {
        let current = fetch(page).await?;
        fetched += 1;
        tracing::debug!(
            page,
            received = current.resources.len(),
            total_pages = current.total_pages,
            "fetched page"
        );

        let has_next = current.has_next();
        let total_results = current.total_results;
        let total_pages = current.total_pages;
        let prev_url = current.prev_url;
        resources.extend(current.resources);

        let next_page = if !has_next {
            None
        } else if fetched >= MAX_PAGES {
            tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
            None
        } else {
            let next = page.checked_add(1);
            if next.is_none() {
                tracing::warn!(page, "Page number cannot be advanced, stopping");
            }
            next
        };

        let Some(next) = next_page else {
            return Ok(PaginatedResponse {
                total_results,
                total_pages,
                prev_url,
                next_url: None,
                resources,
            });
        };
        page = next;
    }
}
