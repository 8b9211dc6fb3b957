use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Empty response from {0}")]
    EmptyResponse(&'static str),

    #[error("Response did not match schema: {0}")]
    Schema(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    #[diagnostic(help("is another process already using that port?"))]
    Server(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
