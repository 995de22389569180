//! Trait definitions for Cloud Foundry operations.
//!
//! Each resource type implements the traits for the verbs its endpoints
//! support. The traits only name the request type; serialization,
//! deserialization and the sync/async decision are shared by all of them.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::{List, PaginatedRequest};
pub use update::Update;
