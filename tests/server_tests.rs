// tests for the http api

mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use common::ScriptedGenerator;
use zenvibe::core::{QUIZ_FALLBACK, REPLY_FALLBACK};
use zenvibe::{Gateway, Server};

fn offline() -> Router {
    Server::router(Arc::new(Gateway::unavailable()))
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_gateway_state() {
    let (status, body) = call(offline(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "gateway": "unavailable" }));
}

#[tokio::test]
async fn test_moderate_offline_returns_fallback() {
    let (status, body) = call(
        offline(),
        post("/moderate", json!({ "content": "I feel sad today" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "isPositive": false,
            "reason": "Moderation service is currently unavailable.",
            "isSevere": false,
        })
    );
}

#[tokio::test]
async fn test_reply_and_feedback_offline() {
    let (_, body) = call(offline(), post("/reply", json!({ "content": "hi" }))).await;
    assert_eq!(body["reply"], REPLY_FALLBACK);

    let (_, body) = call(offline(), post("/quiz/feedback", json!({ "score": 8 }))).await;
    assert_eq!(body["feedback"], QUIZ_FALLBACK);
}

#[tokio::test]
async fn test_moderate_with_model() {
    let (generator, _) = ScriptedGenerator::answering(
        r#"{"isPositive": false, "reason": "Let's keep it kind.", "isSevere": false}"#,
    );
    let app = Server::router(Arc::new(Gateway::with_generator(generator)));

    let (status, body) = call(app, post("/moderate", json!({ "content": "ugh you're dumb" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isPositive"], false);
    assert_eq!(body["reason"], "Let's keep it kind.");
}

#[tokio::test]
async fn test_tabs_default_and_explicit() {
    let (_, body) = call(offline(), get("/tabs")).await;
    assert_eq!(body[0]["tab"], "discussion");
    assert_eq!(body[0]["isActive"], true);

    let (status, body) = call(offline(), get("/tabs?active=resources")).await;
    assert_eq!(status, StatusCode::OK);
    let active: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["isActive"] == true)
        .map(|t| t["tab"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["resources"]);
}

#[tokio::test]
async fn test_unknown_tab_is_bad_request() {
    let (status, body) = call(offline(), get("/tabs?active=settings")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("settings"));
}

#[tokio::test]
async fn test_static_content() {
    let (_, body) = call(offline(), get("/quiz")).await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    let (_, body) = call(offline(), get("/resources")).await;
    assert!(!body["resources"].as_array().unwrap().is_empty());
    assert!(!body["helplines"].as_array().unwrap().is_empty());
}
