//! Service instance endpoints: routes, update and delete.

use cfapi::{
    get_service_instance_routes, CloudFoundryClient, Completion, Delete,
    DeleteServiceInstanceRequest, ListServiceInstanceRoutesRequest, ServiceInstanceResource,
    Update, UpdateServiceInstanceRequest,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INSTANCE_ID: &str = "0b10b5f8-8a1a-4b6c-9c2d-3f2b7a1e6c5d";

#[tokio::test]
async fn test_service_instance_routes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/service_instances/{INSTANCE_ID}/routes")))
        .and(query_param("q", "host IN host-14"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/client/v2/service_instances/GET_{id}_routes_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let mut request = ListServiceInstanceRoutesRequest::new(INSTANCE_ID);
    request.hosts = vec!["host-14".to_string()];
    let routes = get_service_instance_routes(&client, &request).await.unwrap();

    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.id(), "e5ec4aa4-7b1d-4a9b-8d6f-2a0b3e3f3b0e");
    assert_eq!(route.entity.host, "host-14");
    assert!(route.entity.port.is_none());
    assert_eq!(route.entity.service_instance_id.as_deref(), Some(INSTANCE_ID));
}

#[tokio::test]
async fn test_update_service_instance_accepted_incomplete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/service_instances/{INSTANCE_ID}")))
        .and(query_param("accepts_incomplete", "true"))
        .and(body_json(serde_json::json!({"name": "renamed-db"})))
        .respond_with(ResponseTemplate::new(201).set_body_string(include_str!(
            "fixtures/client/v2/service_instances/PUT_{id}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let mut request = UpdateServiceInstanceRequest::new(INSTANCE_ID);
    request.name = Some("renamed-db".to_string());
    request.accepts_incomplete = Some(true);
    let outcome = ServiceInstanceResource::update(&client, request).await.unwrap();

    let instance = outcome.resource().expect("expected the updated instance");
    assert_eq!(instance.entity.name, "renamed-db");
    let op = instance.entity.last_operation.as_ref().unwrap();
    assert_eq!(op.operation_type.as_deref(), Some("update"));
    assert_eq!(op.state.as_deref(), Some("in progress"));
    assert_eq!(instance.entity.tags, vec!["accounting", "mongodb"]);
}

#[tokio::test]
async fn test_delete_service_instance_recursive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v2/service_instances/{INSTANCE_ID}")))
        .and(query_param("recursive", "true"))
        .and(query_param("purge", "false"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let mut request = DeleteServiceInstanceRequest::new(INSTANCE_ID);
    request.recursive = Some(true);
    request.purge = Some(false);
    let outcome = ServiceInstanceResource::delete(&client, request).await.unwrap();

    assert_eq!(outcome, Completion::Empty);
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("recursive=true&purge=false"));
}
