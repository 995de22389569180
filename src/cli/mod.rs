//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the cfapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Cloud Foundry API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "cfapi", about = "Cloud Foundry v2 API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// API root, e.g. https://api.example.com.
    #[arg(long, global = true, env = "CF_API_URL")]
    pub api_url: Option<String>,

    /// OAuth access token.
    #[arg(long, global = true, env = "CF_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single resource by GUID (or name, for feature flags).
    Get {
        /// The type of resource to get.
        entity: Entity,

        /// The GUID or feature flag name.
        id: String,
    },

    /// List resources with optional filtering and pagination.
    List {
        /// The type of resource to list.
        entity: Entity,

        /// Page number (1-indexed, forwarded as given).
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i32>,

        /// Number of resources per page.
        #[arg(long)]
        results_per_page: Option<u32>,

        /// Names to match (repeatable).
        #[arg(long = "name")]
        names: Vec<String>,

        /// Service instance GUID (required for routes).
        #[arg(long)]
        service_instance: Option<String>,

        /// Fetch every page instead of a single one.
        #[arg(long)]
        all: bool,
    },

    /// Delete a resource.
    Delete {
        /// The type of resource to delete.
        entity: Entity,

        /// The GUID of the resource.
        id: String,

        /// Queue the deletion as a background job.
        #[arg(long = "async")]
        asynchronous: bool,

        /// Also delete dependent resources (service instances).
        #[arg(long)]
        recursive: bool,
    },

    /// Enable or disable a feature flag.
    SetFlag {
        /// The feature flag name.
        name: String,

        /// The new value.
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,

        /// Message shown when the disabled feature is used.
        #[arg(long)]
        error_message: Option<String>,
    },
}

/// Resource types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A private domain.
    #[value(alias = "private-domains")]
    PrivateDomain,
    /// A feature flag.
    #[value(alias = "feature-flags")]
    FeatureFlag,
    /// A service instance.
    #[value(alias = "service-instances")]
    ServiceInstance,
    /// A route bound to a service instance.
    #[value(alias = "routes")]
    Route,
    /// A background job.
    #[value(alias = "jobs")]
    Job,
}
