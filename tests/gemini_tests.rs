// tests for the gemini client against a local stand-in for the api

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use zenvibe::core::{FAILURE_REASON, GeminiClient, REPLY_FALLBACK};
use zenvibe::Gateway;

#[derive(Clone)]
struct Fake {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

async fn generate(
    State(fake): State<Fake>,
    Path(model_call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.seen.lock().unwrap().push((model_call, key, body));
    (fake.status, Json(fake.reply.clone()))
}

fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

async fn serve(fake: Fake) -> String {
    let app = Router::new()
        .route("/v1beta/models/{model_call}", post(generate))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn fake(status: StatusCode, reply: Value) -> Fake {
    Fake {
        status,
        reply,
        seen: Arc::new(Mutex::new(Vec::new())),
    }
}

fn gateway(base_url: String) -> Gateway {
    let client = GeminiClient::with_base_url(
        "test-key".to_string(),
        "gemini-2.5-flash".to_string(),
        base_url,
    )
    .unwrap();
    Gateway::with_generator(client)
}

#[tokio::test]
async fn test_moderation_round_trip() {
    let fake = fake(
        StatusCode::OK,
        text_reply(r#"{"isPositive": true, "reason": "", "isSevere": false}"#),
    );
    let seen = fake.seen.clone();
    let gateway = gateway(serve(fake).await);

    let result = gateway.moderate_content("my cat made me smile today").await;
    assert!(result.is_positive);
    assert!(!result.is_severe);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (model_call, key, body) = &seen[0];
    assert_eq!(model_call, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));

    assert_eq!(body["contents"][0]["role"], "user");
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("my cat made me smile today"));
    assert!(body["systemInstruction"]["parts"][0]["text"].is_string());

    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["type"], "OBJECT");
    assert_eq!(
        config["responseSchema"]["required"],
        json!(["isPositive", "reason", "isSevere"])
    );
    assert_eq!(
        config["responseSchema"]["properties"]["isSevere"]["type"],
        "BOOLEAN"
    );
    assert_eq!(
        config["responseSchema"]["properties"]["reason"]["type"],
        "STRING"
    );
}

#[tokio::test]
async fn test_plain_text_has_no_schema() {
    let fake = fake(StatusCode::OK, text_reply("\"You're not alone in this.\""));
    let seen = fake.seen.clone();
    let gateway = gateway(serve(fake).await);

    let reply = gateway.generate_supportive_reply("rough week").await;
    assert_eq!(reply, "You're not alone in this.");

    let seen = seen.lock().unwrap();
    assert!(seen[0].2.get("generationConfig").is_none());
}

#[tokio::test]
async fn test_error_status_falls_back_once() {
    let fake = fake(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota exceeded" } }),
    );
    let seen = fake.seen.clone();
    let gateway = gateway(serve(fake).await);

    let result = gateway.moderate_content("hello").await;
    assert_eq!(result.reason, FAILURE_REASON);
    assert!(!result.is_severe);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_no_candidates_falls_back() {
    let fake = fake(StatusCode::OK, json!({ "candidates": [] }));
    let gateway = gateway(serve(fake).await);

    assert_eq!(
        gateway.generate_supportive_reply("hello").await,
        REPLY_FALLBACK
    );
}

#[tokio::test]
async fn test_unreachable_host_falls_back() {
    // nothing listens on port 9 locally
    let gateway = gateway("http://127.0.0.1:9".to_string());
    let result = gateway.moderate_content("hello").await;
    assert_eq!(result.reason, FAILURE_REASON);
    assert!(!result.is_positive);
}
