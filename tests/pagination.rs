//! Multi-page aggregation against a mocked API.

use cfapi::{
    CfError, CloudFoundryClient, List, ListPrivateDomainsRequest, ListServiceInstanceRoutesRequest,
    PrivateDomainResource, RouteResource,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn domain(guid: &str, name: &str) -> Value {
    json!({
        "metadata": {"guid": guid, "url": format!("/v2/private_domains/{guid}")},
        "entity": {"name": name}
    })
}

fn page(total_results: u64, total_pages: u64, next: Option<&str>, resources: Vec<Value>) -> Value {
    json!({
        "total_results": total_results,
        "total_pages": total_pages,
        "prev_url": null,
        "next_url": next,
        "resources": resources
    })
}

#[tokio::test]
async fn test_list_all_follows_next_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/private_domains"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            5,
            3,
            Some("/v2/private_domains?page=2&results-per-page=2"),
            vec![domain("d-1", "a.com"), domain("d-2", "b.com")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/private_domains"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            5,
            3,
            Some("/v2/private_domains?page=3&results-per-page=2"),
            vec![domain("d-3", "c.com"), domain("d-4", "d.com")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/private_domains"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            5,
            3,
            None,
            vec![domain("d-5", "e.com")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let all = PrivateDomainResource::list_all(&client, &ListPrivateDomainsRequest::default())
        .await
        .unwrap();

    let ids: Vec<&str> = all.iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec!["d-1", "d-2", "d-3", "d-4", "d-5"]);
    assert_eq!(all.total_results, 5);
    assert_eq!(all.total_pages, 3);
    assert!(!all.has_next());
}

#[tokio::test]
async fn test_list_all_keeps_filters_on_every_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/service_instances/si-1/routes"))
        .and(query_param("q", "host IN www"))
        .and(query_param("results-per-page", "1"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            2,
            2,
            Some("/v2/service_instances/si-1/routes?page=2"),
            vec![json!({"metadata": {"guid": "r-1"}, "entity": {"host": "www"}})],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/service_instances/si-1/routes"))
        .and(query_param("q", "host IN www"))
        .and(query_param("results-per-page", "1"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            2,
            2,
            None,
            vec![json!({"metadata": {"guid": "r-2"}, "entity": {"host": "www"}})],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let mut request = ListServiceInstanceRoutesRequest::new("si-1");
    request.hosts = vec!["www".to_string()];
    request.cursor.results_per_page = Some(1);

    let routes = RouteResource::list_all(&client, &request).await.unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes.resources[1].id(), "r-2");
}

#[tokio::test]
async fn test_list_all_aborts_on_failed_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            4,
            2,
            Some("/v2/private_domains?page=2"),
            vec![domain("d-1", "a.com")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 10001,
            "description": "An unknown error occurred.",
            "error_code": "UnknownError"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let err = PrivateDomainResource::list_all(&client, &ListPrivateDomainsRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CfError::Server { status: 500, code: 10001, .. }));
}

#[tokio::test]
async fn test_list_all_starts_at_requested_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            7,
            4,
            None,
            vec![domain("d-7", "g.com")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let request = ListPrivateDomainsRequest::default().with_page(4);
    let all = PrivateDomainResource::list_all(&client, &request).await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all.total_results, 7);
}
