//! Job lookup.

use cfapi::{CloudFoundryClient, Get, GetJobRequest, JobResource, JobStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_failed_job() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/e86ffe00-a243-48f7-be05-8f1f41bee864"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/client/v2/jobs/GET_{id}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let job = JobResource::get(
        &client,
        GetJobRequest::new("e86ffe00-a243-48f7-be05-8f1f41bee864"),
    )
    .await
    .unwrap();

    assert_eq!(job.entity.status, JobStatus::Failed);
    assert!(job.entity.status.is_terminal());
    let details = job.entity.error_details.as_ref().unwrap();
    assert_eq!(details.code, 10001);
    assert_eq!(details.error_code, "UnknownError");
}

#[tokio::test]
async fn test_unknown_job_status_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/j-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": {"guid": "j-1", "url": "/v2/jobs/j-1"},
            "entity": {"guid": "j-1", "status": "paused"}
        })))
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let job = JobResource::get(&client, GetJobRequest::new("j-1")).await.unwrap();

    assert_eq!(job.entity.status, JobStatus::Unknown);
    assert!(!job.entity.status.is_terminal());
}
