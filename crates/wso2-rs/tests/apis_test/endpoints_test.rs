use crate::common::setup_client;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use wso2_rs::apis::models::CreateApiRequest;

#[tokio::test]
async fn test_create_publish_revision_deploy() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/api/am/publisher/v4/apis"))
        .and(body_partial_json(json!({
            "name": "ForexAPI",
            "version": "1.0.0",
            "context": "/forex",
            "endpointConfig": {"production_endpoints": {"url": "http://forex-service:8001"}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "api-42",
            "name": "ForexAPI",
            "version": "1.0.0",
            "context": "/forex",
            "lifeCycleStatus": "CREATED",
            "endpointConfig": {"endpoint_type": "http", "production_endpoints": {"url": "http://forex-service:8001"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/am/publisher/v4/apis/change-lifecycle"))
        .and(query_param("apiId", "api-42"))
        .and(query_param("action", "Publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workflowStatus": "APPROVED",
            "lifecycleState": {"state": "Published"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/am/publisher/v4/apis/api-42/revisions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "rev-1", "displayName": "Revision 1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/am/publisher/v4/apis/api-42/deploy-revision"))
        .and(query_param("revisionId", "rev-1"))
        .and(body_json(json!([{"name": "Default", "vhost": "localhost", "displayOnDevportal": true}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"name": "Default", "vhost": "localhost", "displayOnDevportal": true, "status": "CREATED"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateApiRequest::http("ForexAPI", "1.0.0", "forex", "http://forex-service:8001", "Unlimited");
    let api = client.create_api(&req).await.expect("create api");
    assert_eq!(api.id, "api-42");
    assert_eq!(api.backend_url().as_deref(), Some("http://forex-service:8001"));

    let state = client.publish_api(&api.id).await.expect("publish");
    assert_eq!(state, "Published");

    let rev = client.create_revision(&api.id, "initial").await.expect("revision");
    assert_eq!(rev.id, "rev-1");

    let deployed = client
        .deploy_revision(&api.id, &rev.id, "Default", "localhost")
        .await
        .expect("deploy");
    assert_eq!(deployed[0].name, "Default");
    assert_eq!(deployed[0].status.as_deref(), Some("CREATED"));
}

#[tokio::test]
async fn test_deployed_revisions_reports_environment() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/api/am/publisher/v4/apis/api-42/revisions"))
        .and(query_param("query", "deployed:true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "list": [{
                "id": "rev-1",
                "displayName": "Revision 1",
                "deploymentInfo": [{"name": "Default", "vhost": "localhost", "displayOnDevportal": true, "status": "APPROVED"}]
            }]
        })))
        .mount(&server)
        .await;

    let revisions = client.deployed_revisions("api-42").await.unwrap();
    assert_eq!(revisions.deployed_to("Default").map(|r| r.id.as_str()), Some("rev-1"));
    assert!(revisions.deployed_to("Production and Sandbox").is_none());
}

#[tokio::test]
async fn test_publish_without_lifecycle_state_is_missing_field() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/api/am/publisher/v4/apis/change-lifecycle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workflowStatus": "CREATED"})))
        .mount(&server)
        .await;

    let err = client.publish_api("api-1").await.unwrap_err();
    assert!(matches!(err, wso2_rs::Wso2Error::MissingField(ref f) if f == "lifecycleState.state"));
}
