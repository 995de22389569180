//! Cloud Foundry API CLI binary.
//!
//! A command-line interface for the Cloud Foundry v2 API.

use cfapi::cli::{Cli, Command, Entity};
use cfapi::output::PrettyPrint;
use cfapi::{
    CfError, CloudFoundryClient, Completion, Delete, DeletePrivateDomainRequest,
    DeleteServiceInstanceRequest, FeatureFlag, Get, GetFeatureFlagRequest, GetJobRequest,
    GetPrivateDomainRequest, GetServiceInstanceRequest, JobResource, List,
    ListFeatureFlagsRequest, ListPrivateDomainsRequest, ListServiceInstanceRoutesRequest,
    PageCursor, PaginatedResponse, PrivateDomainResource, RouteResource,
    ServiceInstanceResource, SetFeatureFlagRequest, Update,
};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match (cli.token.as_deref(), cli.api_url.as_deref()) {
        (Some(token), Some(url)) => CloudFoundryClient::new(token, url),
        _ => CloudFoundryClient::from_env(),
    };
    let client = match client {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set CF_API_URL and CF_ACCESS_TOKEN environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &CloudFoundryClient, cli: Cli) -> cfapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            entity,
            page,
            results_per_page,
            names,
            service_instance,
            all,
        } => {
            let cursor = PageCursor {
                page,
                results_per_page,
                ..Default::default()
            };
            handle_list(client, entity, cursor, names, service_instance, all, cli.json).await
        }
        Command::Delete {
            entity,
            id,
            asynchronous,
            recursive,
        } => handle_delete(client, entity, &id, asynchronous, recursive, cli.json).await,
        Command::SetFlag {
            name,
            enabled,
            error_message,
        } => handle_set_flag(client, name, enabled, error_message, cli.json).await,
    }
}

async fn handle_set_flag(
    client: &CloudFoundryClient,
    name: String,
    enabled: bool,
    error_message: Option<String>,
    json: bool,
) -> cfapi::Result<()> {
    let mut request = SetFeatureFlagRequest::new(name.clone(), enabled);
    request.error_message = error_message;
    let outcome = FeatureFlag::update(client, request).await?;

    match &outcome {
        Completion::Resource(flag) => output_single(flag, json),
        Completion::Job(job) => output_single(job, json),
        Completion::Empty => {
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Updated {name}");
            }
            Ok(())
        }
    }
}

async fn handle_get(
    client: &CloudFoundryClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> cfapi::Result<()> {
    match entity {
        Entity::PrivateDomain => {
            let domain =
                PrivateDomainResource::get(client, GetPrivateDomainRequest::new(id)).await?;
            output_single(&domain, json)
        }
        Entity::FeatureFlag => {
            let flag = FeatureFlag::get(client, GetFeatureFlagRequest::new(id)).await?;
            output_single(&flag, json)
        }
        Entity::ServiceInstance => {
            let instance =
                ServiceInstanceResource::get(client, GetServiceInstanceRequest::new(id)).await?;
            output_single(&instance, json)
        }
        Entity::Job => {
            let job = JobResource::get(client, GetJobRequest::new(id)).await?;
            output_single(&job, json)
        }
        Entity::Route => {
            eprintln!("Hint: Use 'cfapi list routes --service-instance <guid>'");
            Err(CfError::Unsupported(
                "routes can only be listed through their service instance".to_string(),
            ))
        }
    }
}

async fn handle_list(
    client: &CloudFoundryClient,
    entity: Entity,
    cursor: PageCursor,
    names: Vec<String>,
    service_instance: Option<String>,
    all: bool,
    json: bool,
) -> cfapi::Result<()> {
    match entity {
        Entity::PrivateDomain => {
            let request = ListPrivateDomainsRequest { names, cursor };
            let page = if all {
                PrivateDomainResource::list_all(client, &request).await?
            } else {
                PrivateDomainResource::list_page(client, &request).await?
            };
            output_page(&page, json, domain_row)
        }
        Entity::Route => {
            let service_instance = service_instance.ok_or_else(|| {
                eprintln!("Hint: Use 'cfapi list routes --service-instance <guid>'");
                CfError::MissingField("service_instance_guid")
            })?;
            let mut request = ListServiceInstanceRoutesRequest::new(service_instance);
            request.cursor = cursor;
            let page = if all {
                RouteResource::list_all(client, &request).await?
            } else {
                RouteResource::list_page(client, &request).await?
            };
            output_page(&page, json, route_row)
        }
        Entity::FeatureFlag => {
            let flags = FeatureFlag::list(client, &ListFeatureFlagsRequest).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&flags)?);
            } else {
                let rows: Vec<FlagRow> = flags.iter().map(FlagRow::from).collect();
                println!("{}", Table::new(rows));
            }
            Ok(())
        }
        Entity::ServiceInstance | Entity::Job => Err(CfError::Unsupported(format!(
            "list {entity:?} is not supported"
        ))),
    }
}

async fn handle_delete(
    client: &CloudFoundryClient,
    entity: Entity,
    id: &str,
    asynchronous: bool,
    recursive: bool,
    json: bool,
) -> cfapi::Result<()> {
    let outcome = match entity {
        Entity::PrivateDomain => {
            let request = DeletePrivateDomainRequest::new(id).with_async(asynchronous);
            PrivateDomainResource::delete(client, request).await?
        }
        Entity::ServiceInstance => {
            let mut request = DeleteServiceInstanceRequest::new(id).with_async(asynchronous);
            request.recursive = recursive.then_some(true);
            ServiceInstanceResource::delete(client, request).await?
        }
        _ => {
            return Err(CfError::Unsupported(format!(
                "delete {entity:?} is not supported"
            )));
        }
    };

    match &outcome {
        Completion::Job(job) => output_single(job, json),
        Completion::Empty | Completion::Resource(()) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Deleted {id}");
            }
            Ok(())
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> cfapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &PaginatedResponse<T>, json: bool, to_row: F) -> cfapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        let rows: Vec<R> = page.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!(
            "\n{} of {} resources ({} pages){}",
            page.len(),
            page.total_results,
            page.total_pages,
            if page.has_next() { ", more available" } else { "" }
        );
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct DomainRow {
    guid: String,
    name: String,
    owner: String,
}

fn domain_row(d: &PrivateDomainResource) -> DomainRow {
    DomainRow {
        guid: d.id().to_string(),
        name: d.entity.name.clone(),
        owner: d.entity.owning_organization_id.clone().unwrap_or_default(),
    }
}

#[derive(Tabled)]
struct RouteRow {
    guid: String,
    host: String,
    path: String,
    port: String,
}

fn route_row(r: &RouteResource) -> RouteRow {
    RouteRow {
        guid: r.id().to_string(),
        host: r.entity.host.clone(),
        path: r.entity.path.clone(),
        port: r.entity.port.map(|p| p.to_string()).unwrap_or_default(),
    }
}

#[derive(Tabled)]
struct FlagRow {
    name: String,
    enabled: bool,
    overridden: bool,
}

impl From<&FeatureFlag> for FlagRow {
    fn from(f: &FeatureFlag) -> Self {
        Self {
            name: f.name.clone(),
            enabled: f.enabled,
            overridden: f.overridden,
        }
    }
}
