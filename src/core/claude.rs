// claude integration

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;
use crate::core::ai::{GenerationRequest, Generator};

const BASE_URL: &str = "https://api.anthropic.com";

pub struct ClaudeClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

// what we send to claude
#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

// what claude sends back
#[derive(Deserialize)]
struct Response {
    content: Vec<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    text: String,
}

impl ClaudeClient {
    pub fn new(api_key: String, model: String) -> Result<Self, Error> {
        Self::with_base_url(api_key, model, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Generator for ClaudeClient {
    fn name(&self) -> &str {
        "claude"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Error> {
        // no native schema support, so the shape goes into the system prompt
        let system = match (&request.system, &request.schema) {
            (Some(system), Some(schema)) => Some(format!("{system}\n\n{}", schema.to_instruction())),
            (None, Some(schema)) => Some(schema.to_instruction()),
            (system, None) => system.clone(),
        };

        let body = Request {
            model: &self.model,
            max_tokens: 1024,
            system,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        debug!(model = %self.model, structured = request.schema.is_some(), "claude request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::Api {
                provider: "claude",
                status: status.as_u16(),
                body,
            });
        }

        let response: Response = response.json().await?;
        let text = response
            .content
            .first()
            .map(|c| c.text.clone())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::EmptyResponse("claude"));
        }

        Ok(text)
    }
}
