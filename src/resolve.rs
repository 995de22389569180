//! Sync/async outcome of mutating operations.
//!
//! A create, update or delete either finishes on the spot or is queued as a
//! background job. [`resolve`] is the single place that tells the two apart,
//! and it does so from the status code and the request's async flag only.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::http::HttpResponse;
use crate::models::JobResource;
use crate::response::{error_for, is_ok_with_body, parse_body, unexpected};

/// Result of a mutating call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "resource", rename_all = "snake_case")]
pub enum Completion<T> {
    /// The operation finished and returned the resource (200/201).
    Resource(T),
    /// The operation was queued as a job (202).
    Job(JobResource),
    /// The operation finished with no content (204).
    Empty,
}

impl<T> Completion<T> {
    /// The finished resource, if any.
    pub fn resource(&self) -> Option<&T> {
        match self {
            Completion::Resource(r) => Some(r),
            _ => None,
        }
    }

    /// The queued job, if any.
    pub fn job(&self) -> Option<&JobResource> {
        match self {
            Completion::Job(j) => Some(j),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Completion::Empty)
    }
}

/// Decide what a mutating call produced.
///
/// With `async_requested` the only acceptable answer is 202 with a job
/// body. Otherwise 200/201 carry the resource, 204 is an empty success and
/// 202 is still read as a job. Jobs are not polled here.
pub fn resolve<T: DeserializeOwned>(
    response: &HttpResponse,
    async_requested: bool,
) -> Result<Completion<T>> {
    match response.status {
        202 => parse_body(response).map(Completion::Job),
        s if async_requested && s < 400 => Err(unexpected(response)),
        s if is_ok_with_body(s) => parse_body(response).map(Completion::Resource),
        204 => Ok(Completion::Empty),
        _ => Err(error_for(response)),
    }
}
