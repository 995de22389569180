//! Basic walkthrough of the Cloud Foundry API client.
//!
//! Run with:
//! ```
//! CF_API_URL=https://api.example.com CF_ACCESS_TOKEN=token cargo run --example basic
//! ```

use cfapi::{
    CloudFoundryClient, FeatureFlag, Get, GetJobRequest, JobResource, List,
    ListFeatureFlagsRequest, ListPrivateDomainsRequest, PageCursor, PrivateDomainResource,
};

#[tokio::main]
async fn main() -> cfapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Cloud Foundry client...");
    let client = CloudFoundryClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // One page of private domains
    println!("\n--- Listing Private Domains (first page) ---");
    let request = ListPrivateDomainsRequest {
        cursor: PageCursor::for_page(1, 10),
        ..Default::default()
    };
    let page = PrivateDomainResource::list_page(&client, &request).await?;
    println!(
        "Showing {} of {} domains ({} pages)",
        page.len(),
        page.total_results,
        page.total_pages
    );
    for domain in &page {
        println!("  - {} ({})", domain.entity.name, domain.id());
    }

    // Every page, merged
    println!("\n--- Listing All Private Domains ---");
    let all = PrivateDomainResource::list_all(&client, &ListPrivateDomainsRequest::default()).await?;
    println!("Collected {} domains", all.len());

    // Feature flags come back as a plain array
    println!("\n--- Feature Flags ---");
    let flags = FeatureFlag::list(&client, &ListFeatureFlagsRequest).await?;
    for flag in flags.iter().take(5) {
        let state = if flag.enabled { "on" } else { "off" };
        println!("  {} = {}", flag.name, state);
    }

    // Look up a job if one was given on the command line
    if let Some(job_id) = std::env::args().nth(1) {
        println!("\n--- Job Status ---");
        let job = JobResource::get(&client, GetJobRequest::new(job_id)).await?;
        println!("  {} is {}", job.id(), job.entity.status.as_str());
    }

    println!("\nDone!");
    Ok(())
}
