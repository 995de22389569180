//! Feature flag endpoints, which answer with flat objects and bare arrays.

use cfapi::{
    CloudFoundryClient, FeatureFlag, Get, GetFeatureFlagRequest, JobStatus,
    ListFeatureFlagsRequest, SetFeatureFlagRequest, Update,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_feature_flags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/config/feature_flags"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/client/v2/feature_flags/GET_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let flags = FeatureFlag::list(&client, &ListFeatureFlagsRequest).await.unwrap();

    let names: Vec<&str> = flags.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["user_org_creation", "private_domain_creation", "app_scaling"]
    );
    assert!(flags[1].overridden);
    assert!(flags[2].enabled);
}

#[tokio::test]
async fn test_get_feature_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/config/feature_flags/user_org_creation"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/client/v2/feature_flags/GET_{name}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let flag = FeatureFlag::get(&client, GetFeatureFlagRequest::new("user_org_creation"))
        .await
        .unwrap();

    assert_eq!(flag.name, "user_org_creation");
    assert!(!flag.enabled);
    assert_eq!(flag.default_value, Some(false));
    assert!(flag.error_message.is_none());
}

#[tokio::test]
async fn test_set_feature_flag() {
    let mock_server = MockServer::start().await;

    let expected_body: serde_json::Value = serde_json::from_str(include_str!(
        "fixtures/client/v2/feature_flags/PUT_{name}_request.json"
    ))
    .unwrap();

    Mock::given(method("PUT"))
        .and(path("/v2/config/feature_flags/app_scaling"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/client/v2/feature_flags/PUT_{name}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let mut request = SetFeatureFlagRequest::new("app_scaling", true);
    request.error_message = Some("Scaling is disabled".to_string());
    let outcome = FeatureFlag::update(&client, request).await.unwrap();
    let flag = outcome.resource().expect("expected the updated flag");

    assert!(flag.enabled);
    assert!(flag.overridden);
    assert_eq!(flag.error_message.as_deref(), Some("Scaling is disabled"));
}

#[tokio::test]
async fn test_set_feature_flag_accepted_as_job() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/config/feature_flags/app_scaling"))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "metadata": {"guid": "j-1", "url": "/v2/jobs/j-1", "created_at": "2016-02-02T17:16:31Z"},
            "entity": {"guid": "j-1", "status": "queued"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let outcome = FeatureFlag::update(&client, SetFeatureFlagRequest::new("app_scaling", false))
        .await
        .unwrap();

    let job = outcome.job().expect("expected a queued job");
    assert_eq!(job.id(), "j-1");
    assert_eq!(job.entity.status, JobStatus::Queued);
    assert!(outcome.resource().is_none());
}
