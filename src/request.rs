//! Request serialization.
//!
//! Every request type implements [`ApiRequest`], which is the table mapping
//! its fields to wire roles: path parameters, `q` filters, pagination,
//! extra query parameters and the JSON body. [`serialize`] consumes that
//! table uniformly, so no resource carries its own serialization code.
//!
//! Body fields are selected by serde attributes on the request struct:
//! fields with another role are `#[serde(skip)]`, optional body fields are
//! `skip_serializing_if = "Option::is_none"`. serde writes struct fields in
//! declaration order, which keeps the body byte-stable.

use serde::Serialize;

use crate::error::{CfError, Result};
use crate::filter::{FilterParameter, QueryString};
use crate::http::{HttpMethod, HttpRequest};
use crate::pagination::PageCursor;

/// Wire-role description of one request type.
pub trait ApiRequest: Send + Sync {
    /// HTTP method of the operation.
    const METHOD: HttpMethod;

    /// Path template, with `{name}` placeholders for path parameters.
    const PATH: &'static str;

    /// Value of the path parameter `name`.
    fn path_param(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Check required non-path fields before anything is sent.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Filters rendered as `q` clauses, in order.
    fn filters(&self) -> Vec<FilterParameter> {
        Vec::new()
    }

    /// Pagination controls, for list operations.
    fn page_cursor(&self) -> Option<&PageCursor> {
        None
    }

    /// Additional operation-specific query parameters.
    fn query_params(&self, _query: &mut QueryString) {}

    /// Whether the caller asked the server to run the operation as a job.
    fn is_async(&self) -> bool {
        false
    }

    /// The JSON body, if the operation has one.
    fn body(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Serialize `value` as a request body.
pub fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<Option<String>> {
    Ok(Some(serde_json::to_string(value)?))
}

/// Fail with [`CfError::MissingField`] when a required value is empty.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(CfError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Turn a request into the exact call that will be sent.
///
/// Fails before any I/O when validation fails or a placeholder of the path
/// template cannot be filled. The same request always yields the same
/// [`HttpRequest`].
pub fn serialize<R: ApiRequest>(request: &R) -> Result<HttpRequest> {
    request.validate()?;
    let path = resolve_path(R::PATH, |name| request.path_param(name))?;

    let mut query = QueryString::new();
    for filter in request.filters() {
        if let Some(clause) = filter.render() {
            tracing::trace!(%clause, "adding filter");
        }
        query.push_filter(&filter);
    }
    if let Some(cursor) = request.page_cursor() {
        query.push_cursor(cursor);
    }
    request.query_params(&mut query);
    if request.is_async() {
        query.push("async", true);
    }

    Ok(HttpRequest {
        method: R::METHOD,
        path,
        query,
        body: request.body()?,
    })
}

/// Substitute every `{name}` in `template`, percent-encoding the values.
fn resolve_path<'a, F>(template: &'static str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| CfError::MissingPathParameter {
            name: after.to_string(),
            template,
        })?;
        let name = &after[..end];
        let value = lookup(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CfError::MissingPathParameter {
                name: name.to_string(),
                template,
            })?;
        path.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}
