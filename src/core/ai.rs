// generation backends - the one place that talks to the network

use async_trait::async_trait;
use clap::ValueEnum;
use serde_json::{Value, json};

use crate::Error;
use crate::core::claude::ClaudeClient;
use crate::core::gemini::GeminiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
    Claude,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.5-flash",
            Provider::Claude => "claude-sonnet-4-20250514",
        }
    }

    /// Build a client for this provider.
    pub fn client(
        self,
        api_key: String,
        model: Option<String>,
    ) -> Result<Box<dyn Generator>, Error> {
        let model = model.unwrap_or_else(|| self.default_model().to_string());
        Ok(match self {
            Provider::Gemini => Box::new(GeminiClient::new(api_key, model)?),
            Provider::Claude => Box::new(ClaudeClient::new(api_key, model)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    String,
}

#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Shape the model must answer with. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct ResponseSchema {
    pub fields: Vec<SchemaField>,
}

impl ResponseSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        self.fields.push(SchemaField {
            name,
            kind,
            description,
        });
        self
    }

    /// OpenAPI-style object schema, the dialect gemini's `responseSchema` takes.
    pub fn to_openapi(&self) -> Value {
        let properties: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|f| {
                let kind = match f.kind {
                    FieldKind::Boolean => "BOOLEAN",
                    FieldKind::String => "STRING",
                };
                (
                    f.name.to_string(),
                    json!({ "type": kind, "description": f.description }),
                )
            })
            .collect();

        let required: Vec<&str> = self.fields.iter().map(|f| f.name).collect();

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": required,
        })
    }

    /// Plain-language version for providers without native schema support.
    pub fn to_instruction(&self) -> String {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|f| {
                let kind = match f.kind {
                    FieldKind::Boolean => "boolean",
                    FieldKind::String => "string",
                };
                format!("- \"{}\" ({kind}): {}", f.name, f.description)
            })
            .collect();

        format!(
            "Respond with ONLY a JSON object, no markdown and no other text. \
             It must have exactly these fields:\n{}",
            fields.join("\n")
        )
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            schema: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// One request/response round trip against a hosted model.
#[async_trait]
pub trait Generator: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    /// Returns the model's text payload. Structured requests get the raw JSON text back.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, Error>;
}
