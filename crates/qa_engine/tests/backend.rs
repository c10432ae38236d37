use std::time::Duration;

use pretty_assertions::assert_eq;
use qa_core::{Action, BackendReply, BackendRequest, RequestOutcome};
use qa_engine::{run_request, Backend, ClientSettings, FailureKind, ReqwestBackend};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    ReqwestBackend::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("backend")
}

#[tokio::test]
async fn scrape_posts_url_and_reads_message() {
    qa_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_json(json!({ "url": "http://example.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Scraped 12 pages", "product_id": "p-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let request = BackendRequest::Scrape {
        url: "http://example.com".to_string(),
    };

    let outcome = run_request(&backend, &request).await;
    assert_eq!(outcome, RequestOutcome::Success("Scraped 12 pages".to_string()));
}

#[tokio::test]
async fn query_posts_question_and_reads_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "What is X?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "X is Y." })))
        .mount(&server)
        .await;

    let reply = backend_for(&server).query("What is X?").await.expect("reply");
    assert_eq!(reply, BackendReply::answer("X is Y."));
}

#[tokio::test]
async fn upload_sends_file_as_multipart_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"items.csv\""))
        .and(body_string_contains("text/csv"))
        .and(body_string_contains("id,name\n1,widget\n"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Embedding created from uploaded file." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("items.csv");
    std::fs::write(&file, "id,name\n1,widget\n").unwrap();

    let outcome = run_request(&backend_for(&server), &BackendRequest::Upload { path: file }).await;
    assert_eq!(
        outcome,
        RequestOutcome::Success("Embedding created from uploaded file.".to_string())
    );
}

#[tokio::test]
async fn missing_upload_file_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let err = backend_for(&server)
        .upload(&dir.path().join("gone.pdf"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::FileRead);
}

#[tokio::test]
async fn reported_error_field_is_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "index not found" })),
        )
        .mount(&server)
        .await;

    let request = BackendRequest::Query {
        query: "anything".to_string(),
    };
    let outcome = run_request(&backend_for(&server), &request).await;
    assert_eq!(outcome, RequestOutcome::Success("index not found".to_string()));
}

#[tokio::test]
async fn http_status_failure_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = backend_for(&server).scrape("http://x").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(
        RequestOutcome::from_result(Action::Scrape, Err(err)).text(),
        "Scrape error: Request failed with status code 500"
    );
}

#[tokio::test]
async fn non_json_body_settles_with_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let request = BackendRequest::Query {
        query: "q".to_string(),
    };
    let outcome = run_request(&backend_for(&server), &request).await;
    assert_eq!(outcome, RequestOutcome::Success(String::new()));
}

#[tokio::test]
async fn empty_body_settles_with_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let request = BackendRequest::Scrape {
        url: "http://example.com".to_string(),
    };
    let outcome = run_request(&backend_for(&server), &request).await;
    assert_eq!(outcome, RequestOutcome::Success(String::new()));
}

#[tokio::test]
async fn slow_backend_times_out_when_limit_is_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "answer": "late" })),
        )
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    })
    .unwrap();
    let request = BackendRequest::Query {
        query: "What is X?".to_string(),
    };

    let outcome = run_request(&backend, &request).await;
    assert_eq!(outcome, RequestOutcome::Failure("Query error: timeout".to_string()));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let backend = ReqwestBackend::new(ClientSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ClientSettings::default()
    })
    .unwrap();

    let err = backend.query("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestBackend::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
}
