//! Cloud Foundry v2 resource types.

mod feature_flag;
mod job;
mod organization;
mod private_domain;
mod service_instance;

pub use feature_flag::*;
pub use job::*;
pub use organization::*;
pub use private_domain::*;
pub use service_instance::*;
