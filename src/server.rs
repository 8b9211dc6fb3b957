// http server mode - the api a web front end talks to

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::core::quiz::QUESTIONS;
use crate::core::resources::{HELPLINES, Helpline, RESOURCES, Resource};
use crate::core::{Gateway, ModerationResult};
use crate::nav::{Navigation, Tab, TabItem};
use crate::Error;

#[derive(Deserialize)]
struct ContentRequest {
    content: String,
}

#[derive(Deserialize)]
struct QuizRequest {
    score: f64,
}

#[derive(Deserialize)]
struct TabsQuery {
    active: Option<String>,
}

#[derive(Serialize)]
struct ReplyResponse {
    reply: String,
}

#[derive(Serialize)]
struct FeedbackResponse {
    feedback: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    gateway: &'static str,
}

#[derive(Serialize)]
struct ResourcesResponse {
    resources: &'static [Resource],
    helplines: &'static [Helpline],
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub struct Server;

impl Server {
    /// Routes on their own, so they can be driven without a socket.
    pub fn router(gateway: Arc<Gateway>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/tabs", get(tabs))
            .route("/moderate", post(moderate))
            .route("/reply", post(reply))
            .route("/quiz", get(quiz))
            .route("/quiz/feedback", post(quiz_feedback))
            .route("/resources", get(resources))
            .layer(CorsLayer::permissive())
            .with_state(gateway)
    }

    pub async fn run(gateway: Gateway, host: &str, port: u16) -> Result<(), Error> {
        let app = Self::router(Arc::new(gateway));

        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        info!(%addr, "server listening");
        println!("server running at http://{addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        Ok(())
    }
}

async fn health(State(gateway): State<Arc<Gateway>>) -> Json<HealthResponse> {
    let status = if gateway.is_available() {
        "available"
    } else {
        "unavailable"
    };
    Json(HealthResponse {
        status: "ok",
        gateway: status,
    })
}

async fn tabs(
    Query(query): Query<TabsQuery>,
) -> Result<Json<Vec<TabItem>>, (StatusCode, Json<ErrorResponse>)> {
    let active = match query.active {
        Some(id) => id.parse::<Tab>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?,
        None => Tab::default(),
    };

    Ok(Json(Navigation.render(active)))
}

async fn moderate(
    State(gateway): State<Arc<Gateway>>,
    Json(req): Json<ContentRequest>,
) -> Json<ModerationResult> {
    Json(gateway.moderate_content(&req.content).await)
}

async fn reply(
    State(gateway): State<Arc<Gateway>>,
    Json(req): Json<ContentRequest>,
) -> Json<ReplyResponse> {
    let reply = gateway.generate_supportive_reply(&req.content).await;
    Json(ReplyResponse { reply })
}

async fn quiz() -> Json<&'static [&'static str]> {
    Json(&QUESTIONS)
}

async fn quiz_feedback(
    State(gateway): State<Arc<Gateway>>,
    Json(req): Json<QuizRequest>,
) -> Json<FeedbackResponse> {
    let feedback = gateway.get_quiz_feedback(req.score).await;
    Json(FeedbackResponse { feedback })
}

async fn resources() -> Json<ResourcesResponse> {
    Json(ResourcesResponse {
        resources: RESOURCES,
        helplines: HELPLINES,
    })
}
