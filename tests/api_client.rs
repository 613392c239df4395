//! Integration tests for the record source adapter against a mock server.
//!
//! Each test mounts its own wiremock server; the client under test is the
//! same one the app uses. The fetch lifecycle is exercised end-to-end:
//! one request, one outcome, no retries.

use perch::api::{ApiClient, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMMENTS_JSON: &str = r#"[
    {"postId": 2, "id": 1, "name": "Bob", "email": "b@x.com", "body": "hi"},
    {"postId": 1, "id": 2, "name": "Ann", "email": "a@x.com", "body": "yo"}
]"#;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), &server.uri()).unwrap()
}

// ============================================================================
// Success paths
// ============================================================================

#[tokio::test]
async fn comments_fetch_preserves_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(COMMENTS_JSON)
                .insert_header("Content-Type", "application/json"),
        )
        .mount(&server)
        .await;

    let comments = client_for(&server).fetch_comments().await.unwrap();

    // Fetch order is the pipeline's "unsorted" order; it must survive decoding
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].name, "Bob");
    assert_eq!(comments[1].name, "Ann");
    assert_eq!(comments[0].post_id, 2);
}

#[tokio::test]
async fn user_fetch_hits_the_configured_id() {
    let user_json = r#"{
        "id": 4, "name": "Patricia Lebsack", "email": "Julianne.OConner@kory.org",
        "phone": "493-170-9623 x156",
        "address": {"street": "Hoeger Mall", "suite": "Apt. 692", "city": "South Elvis"}
    }"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(user_json))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).fetch_user(4).await.unwrap();
    assert_eq!(user.id, 4);
    assert_eq!(user.address.single_line(), "Hoeger Mall Apt. 692 South Elvis");
}

#[tokio::test]
async fn base_url_with_path_prefix_joins_correctly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiClient::new(reqwest::Client::new(), &format!("{}/api/v1", server.uri())).unwrap();
    let comments = client.fetch_comments().await.unwrap();
    assert!(comments.is_empty());
}

// ============================================================================
// Failure paths — single request, single outcome
// ============================================================================

#[tokio::test]
async fn transport_failure_surfaces_a_nonempty_message() {
    // Nothing listens on this port; the connection itself fails
    let client = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:1").unwrap();

    let err = client.fetch_comments().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn non_success_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // The adapter must not retry
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_comments().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus(500)));
}

#[tokio::test]
async fn user_404_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_user(99).await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus(404)));
}

#[tokio::test]
async fn malformed_payload_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_comments().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn records_missing_required_fields_map_to_decode() {
    // Well-formed JSON array, but the records lack the expected shape
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id": 1}]"#))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_comments().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}
