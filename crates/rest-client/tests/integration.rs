use rest_client::{ClientError, HttpRequest, ReqwestClient, RestClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(format!("{}/api", server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_decodes_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "a" }])))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .request(&HttpRequest::get("/tasks"))
        .await
        .unwrap();

    assert_eq!(body, json!([{ "id": 1, "name": "a" }]));
}

#[tokio::test]
async fn test_patch_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/tasks/2"))
        .and(body_json(json!({ "id": 2, "completed": true })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 2, "name": "b", "completed": true })),
        )
        .mount(&server)
        .await;

    let body = client_for(&server)
        .send(&HttpRequest::patch(
            "/tasks/2",
            json!({ "id": 2, "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(body["completed"], json!(true));
}

#[tokio::test]
async fn test_empty_body_decodes_to_null() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .send(&HttpRequest::delete("/tasks/3"))
        .await
        .unwrap();

    assert!(body.is_null());
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send(&HttpRequest::get("/tasks"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status code 500");
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(201).set_body_string("OK"))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .send(&HttpRequest::post("/tasks", json!({ "task": "x" })))
        .await
        .unwrap();

    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = ReqwestClient::new(format!("http://127.0.0.1:{port}/api")).unwrap();
    let err = client
        .send(&HttpRequest::get("/tasks"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_trait_error_keeps_client_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client: Box<dyn RestClient> = Box::new(client_for(&server));
    let err = client
        .request(&HttpRequest::get("/missing"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status code 404");
    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::Status { status: 404, .. })
    ));
}
