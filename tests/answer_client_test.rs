//! Chat Completions クライアントのテスト
//!
//! ローカルのaxumサーバーをAPIの代わりに立て、送信内容とレスポンス処理を検証

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wordsolver::answer::{AnswerError, AnswerGenerator, OpenAiClient};
use wordsolver::ocr::{OcrError, TextRecognizer};
use wordsolver::ImageSolver;
use wordsolver_common::{SubmissionOutcome, UploadedImage};

#[derive(Clone)]
struct MockApi {
    captured: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
    status: StatusCode,
    reply: Value,
}

impl MockApi {
    fn new(status: StatusCode, reply: Value) -> Self {
        Self {
            captured: Arc::new(Mutex::new(Vec::new())),
            status,
            reply,
        }
    }
}

async fn completions(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.captured.lock().unwrap().push((headers, body));
    (api.status, Json(api.reply.clone()))
}

async fn spawn_api(api: MockApi) -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1/chat/completions", addr)
}

fn answer_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

struct FixedRecognizer(&'static str);

#[async_trait]
impl TextRecognizer for FixedRecognizer {
    async fn recognize(&self, _data_url: &str, _language: &str) -> Result<String, OcrError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn test_request_headers_and_body() {
    let api = MockApi::new(StatusCode::OK, answer_reply("4"));
    let endpoint = spawn_api(api.clone()).await;

    let client = OpenAiClient::new("sk-test").with_endpoint(endpoint);
    let answer = client.generate("2+2=?").await.unwrap();
    assert_eq!(answer, "4");

    let captured = api.captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let (headers, body) = &captured[0];

    assert_eq!(headers["authorization"], "Bearer sk-test");
    assert_eq!(headers["content-type"], "application/json");

    assert_eq!(body["model"], "gpt-4-turbo-preview");
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["top_p"], 0.99);
    assert_eq!(body["messages"][0]["role"], "user");
    let content = body["messages"][0]["content"].as_str().unwrap();
    assert!(content.starts_with("You are a calculator"));
    assert!(content.ends_with("2+2=?"));
}

#[tokio::test]
async fn test_error_status() {
    let api = MockApi::new(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    );
    let endpoint = spawn_api(api).await;

    let client = OpenAiClient::new("sk-wrong").with_endpoint(endpoint);
    let err = client.generate("2+2=?").await.unwrap_err();

    match err {
        AnswerError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_parse_error() {
    let api = MockApi::new(StatusCode::OK, json!({ "choices": [] }));
    let endpoint = spawn_api(api).await;

    let client = OpenAiClient::new("sk-test").with_endpoint(endpoint);
    let err = client.generate("2+2=?").await.unwrap_err();
    assert!(matches!(err, AnswerError::Parse(_)));
}

#[tokio::test]
async fn test_solver_shows_answer_from_api() {
    let api = MockApi::new(StatusCode::OK, answer_reply("4"));
    let endpoint = spawn_api(api.clone()).await;

    let mut solver = ImageSolver::new(
        FixedRecognizer("2+2=?"),
        OpenAiClient::new("sk-test").with_endpoint(endpoint),
    );
    let image = UploadedImage::from_bytes("q.png", "q.png", "image/png", b"\x89PNG");

    let outcome = solver.submit(Some(image), |_| {}).await;

    assert!(matches!(outcome, Some(SubmissionOutcome::Answered { .. })));
    assert_eq!(solver.state().view().answer_panel, Some("4"));
    assert!(!solver.state().loading);
}

#[tokio::test]
async fn test_solver_hides_api_failure() {
    let api = MockApi::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "server error" } }),
    );
    let endpoint = spawn_api(api).await;

    let mut solver = ImageSolver::new(
        FixedRecognizer("2+2=?"),
        OpenAiClient::new("sk-test").with_endpoint(endpoint),
    );
    let image = UploadedImage::from_bytes("q.png", "q.png", "image/png", b"\x89PNG");

    let outcome = solver.submit(Some(image), |_| {}).await;

    assert!(matches!(outcome, Some(SubmissionOutcome::AnswerFailed { .. })));
    let view = solver.state().view();
    assert!(view.error_banner.is_none());
    assert!(view.answer_panel.is_none());
    assert!(!solver.state().loading);
}
