//! Job model.
//!
//! Jobs are returned in place of a finished resource when a mutating call
//! is queued by the server.

use serde::{Deserialize, Serialize};

use crate::http::HttpMethod;
use crate::request::ApiRequest;
use crate::response::{ErrorPayload, Resource};
use crate::traits::Get;

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Waiting to run.
    #[default]
    Queued,
    /// Currently running.
    Running,
    /// Completed successfully.
    Finished,
    /// Completed with an error.
    Failed,
    /// Status not known to this client.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Finished => "finished",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }

    /// Whether the job will not change state again.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Failed)
    }
}

/// The entity of a job resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntity {
    /// The job GUID.
    #[serde(rename = "guid", default)]
    pub id: String,

    /// Current status.
    #[serde(default)]
    pub status: JobStatus,

    /// Error message of a failed job.
    #[serde(default)]
    pub error: Option<String>,

    /// Structured error of a failed job.
    #[serde(default)]
    pub error_details: Option<ErrorPayload>,
}

/// A job with its metadata.
pub type JobResource = Resource<JobEntity>;

/// Request for a single job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetJobRequest {
    /// The job GUID.
    pub job_id: String,
}

impl GetJobRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }
}

impl ApiRequest for GetJobRequest {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/v2/jobs/{job_guid}";

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "job_guid").then_some(self.job_id.as_str())
    }
}

impl Get for JobResource {
    type Request = GetJobRequest;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::serialize;

    #[test]
    fn test_job_deserialize_failed() {
        let json = r#"{
            "metadata": {"guid": "j-1", "created_at": "2016-02-02T17:16:31Z", "url": "/v2/jobs/j-1"},
            "entity": {
                "guid": "j-1",
                "status": "failed",
                "error": "Use of entity>error is deprecated in favor of entity>error_details.",
                "error_details": {
                    "error_code": "UnknownError",
                    "description": "An unknown error occurred.",
                    "code": 10001
                }
            }
        }"#;
        let job: JobResource = serde_json::from_str(json).expect("Failed to deserialize job");

        assert_eq!(job.entity.status, JobStatus::Failed);
        assert!(job.entity.status.is_terminal());
        assert_eq!(job.entity.error_details.unwrap().code, 10001);
    }

    #[test]
    fn test_job_status_unknown() {
        let status: JobStatus = serde_json::from_str(r#""paused""#).unwrap();
        assert_eq!(status, JobStatus::Unknown);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_get_job_path() {
        let request = serialize(&GetJobRequest::new("j-1")).unwrap();
        assert_eq!(request.path_and_query(), "/v2/jobs/j-1");
        assert!(request.body.is_none());
    }
}
