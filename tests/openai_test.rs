use git_release_notes::llm::{ApiKey, OpenAiSummarizer, SummaryRequest, Summarizer};
use git_release_notes::ReleaseNotesError;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> SummaryRequest {
    SummaryRequest {
        prompt: "Write the changelog entry.".to_string(),
        commits: vec!["feat: add export".to_string(), "fix: \"quoted\" crash".to_string()],
    }
}

fn summarizer(server: &MockServer) -> OpenAiSummarizer {
    OpenAiSummarizer::new("gpt-4o", format!("{}/v1", server.uri()))
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_summarize_returns_content_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(json!("## [v1.3.0] - 2024-05-01\n\n### Bug Fixes\n"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = summarizer(&server)
        .summarize(&ApiKey::new("sk-test"), &request())
        .await
        .unwrap();

    assert_eq!(text, "## [v1.3.0] - 2024-05-01\n\n### Bug Fixes\n");
}

#[tokio::test]
async fn test_request_body_carries_prompt_and_commits() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("ok"))))
        .mount(&server)
        .await;

    summarizer(&server)
        .with_temperature(Some(0.5))
        .summarize(&ApiKey::new("sk-test"), &request())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);

    let body: Value = received[0].body_json().unwrap();
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "Write the changelog entry.");
    assert_eq!(body["messages"][1]["role"], "user");

    let commits: Vec<String> =
        serde_json::from_str(body["messages"][1]["content"].as_str().unwrap()).unwrap();
    assert_eq!(commits, request().commits);
}

#[tokio::test]
async fn test_null_content_is_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(Value::Null)))
        .mount(&server)
        .await;

    let text = summarizer(&server)
        .summarize(&ApiKey::new("sk-test"), &request())
        .await
        .unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn test_auth_error_is_summarization_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "Incorrect API key provided" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = summarizer(&server)
        .summarize(&ApiKey::new("sk-wrong"), &request())
        .await
        .unwrap_err();

    match err {
        ReleaseNotesError::SummarizationFailed(message) => {
            assert!(message.contains("401"), "got: {}", message);
            assert!(message.contains("Incorrect API key"), "got: {}", message);
        }
        other => panic!("expected SummarizationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_summarization_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = summarizer(&server)
        .summarize(&ApiKey::new("sk-test"), &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseNotesError::SummarizationFailed(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_summarization_failure() {
    let server = MockServer::start().await;
    let base = format!("{}/v1", server.uri());
    drop(server);

    let err = OpenAiSummarizer::new("gpt-4o", base)
        .summarize(&ApiKey::new("sk-test"), &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseNotesError::SummarizationFailed(_)));
}
