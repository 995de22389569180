//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{FeatureFlag, JobResource, Metadata, PrivateDomainResource, ServiceInstanceResource};

/// Trait for human-readable key-value output.
///
/// Implemented by resource types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(kind: &str, metadata: &Metadata) -> Vec<String> {
    let title = format!("{kind}: {}", metadata.id);
    let divider = "─".repeat(title.chars().count().max(30));
    let mut lines = vec![title, divider];

    if let Some(ref created) = metadata.created_at {
        lines.push(format!("Created:        {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    lines
}

impl PrettyPrint for PrivateDomainResource {
    fn pretty_print(&self) -> String {
        let mut lines = header("Private Domain", &self.metadata);
        lines.push(format!("Name:           {}", self.entity.name));

        if let Some(ref org) = self.entity.owning_organization_id {
            lines.push(format!("Owning Org:     {}", org));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ServiceInstanceResource {
    fn pretty_print(&self) -> String {
        let mut lines = header("Service Instance", &self.metadata);
        lines.push(format!("Name:           {}", self.entity.name));

        if let Some(ref kind) = self.entity.instance_type {
            lines.push(format!("Type:           {}", kind));
        }

        if let Some(ref op) = self.entity.last_operation {
            lines.push(format!(
                "Last Op:        {} ({})",
                op.operation_type.as_deref().unwrap_or("-"),
                op.state.as_deref().unwrap_or("-")
            ));
        }

        if !self.entity.tags.is_empty() {
            lines.push(format!("Tags:           {}", self.entity.tags.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for JobResource {
    fn pretty_print(&self) -> String {
        let mut lines = header("Job", &self.metadata);
        lines.push(format!("Status:         {}", self.entity.status.as_str()));

        if let Some(ref details) = self.entity.error_details {
            lines.push(format!("Error:          {} ({})", details.description, details.error_code));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for FeatureFlag {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.name.len().max(30));
        let mut lines = vec![
            format!("Feature Flag: {}", self.name),
            divider,
            format!("Enabled:        {}", if self.enabled { "yes" } else { "no" }),
        ];

        if self.overridden {
            lines.push("Overridden:     yes".to_string());
        }

        if let Some(ref message) = self.error_message {
            lines.push(format!("Error Message:  {}", message));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_domain_pretty_print_format() {
        let domain: PrivateDomainResource = serde_json::from_value(serde_json::json!({
            "metadata": {"guid": "d-1", "url": "/v2/private_domains/d-1", "created_at": "2016-02-19T02:04:00Z"},
            "entity": {"name": "my-domain.com", "owning_organization_guid": "org-1"}
        }))
        .unwrap();

        let output = domain.pretty_print();
        assert!(output.starts_with("Private Domain: d-1"));
        assert!(output.contains("Name:           my-domain.com"));
        assert!(output.contains("Created:        2016-02-19 02:04:00 UTC"));
    }

    #[test]
    fn test_job_pretty_print_status() {
        let job: JobResource = serde_json::from_value(serde_json::json!({
            "metadata": {"guid": "j-1"},
            "entity": {"guid": "j-1", "status": "running"}
        }))
        .unwrap();

        assert!(job.pretty_print().contains("Status:         running"));
    }
}
