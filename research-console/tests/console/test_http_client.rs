//! Tests for the HTTP pipeline client against a mocked research endpoint

use research_console::client::HttpPipeline;
use research_console_sdk::{PipelineError, ResearchPipeline, ResearchRequest};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::sample_response;

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/research", server.uri())
}

#[tokio::test]
async fn test_posts_query_as_json_and_parses_report() {
    let server = MockServer::start().await;
    let response = sample_response(4, 2);

    Mock::given(method("POST"))
        .and(path("/api/research"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "iPhone 16 market trends"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = HttpPipeline::new(endpoint(&server), None).unwrap();
    let parsed = pipeline
        .run(ResearchRequest::new("iPhone 16 market trends"))
        .await
        .unwrap();

    assert_eq!(parsed, response);
    assert_eq!(pipeline.endpoint(), endpoint(&server));
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let server = MockServer::start().await;
    let mut body = serde_json::to_value(sample_response(1, 1)).unwrap();
    body["synthesis"] = json!([{"task": "t", "summary": "s"}]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let pipeline = HttpPipeline::new(endpoint(&server), None).unwrap();
    assert!(pipeline.run(ResearchRequest::new("q")).await.is_ok());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/research"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Research pipeline failed to generate results."})),
        )
        .mount(&server)
        .await;

    let pipeline = HttpPipeline::new(endpoint(&server), None).unwrap();
    let err = pipeline.run(ResearchRequest::new("q")).await.unwrap_err();

    match err {
        PipelineError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("failed to generate results"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_report_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
        .mount(&server)
        .await;

    let pipeline = HttpPipeline::new(endpoint(&server), None).unwrap();
    let err = pipeline.run(ResearchRequest::new("q")).await.unwrap_err();

    assert!(matches!(err, PipelineError::MalformedPayload(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let pipeline = HttpPipeline::new("http://127.0.0.1:1/api/research", None).unwrap();
    let err = pipeline.run(ResearchRequest::new("q")).await.unwrap_err();

    assert!(matches!(err, PipelineError::Transport(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_response(1, 1))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let pipeline =
        HttpPipeline::new(endpoint(&server), Some(Duration::from_millis(200))).unwrap();
    let err = pipeline.run(ResearchRequest::new("q")).await.unwrap_err();

    assert!(matches!(err, PipelineError::Transport(_)));
}
