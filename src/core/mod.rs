// core logic - the ai gateway and the content it works with

mod ai;
mod claude;
mod gateway;
mod gemini;
mod moderation;
pub mod quiz;
pub mod resources;

pub use ai::{FieldKind, GenerationRequest, Generator, Provider, ResponseSchema, SchemaField};
pub use claude::ClaudeClient;
pub use gateway::{
    ClientHandle, Gateway, QUIZ_FALLBACK, REPLY_FALLBACK, moderation_prompt, quiz_prompt,
    reply_prompt, strip_wrapping_quotes,
};
pub use gemini::GeminiClient;
pub use moderation::{FAILURE_REASON, ModerationResult, UNAVAILABLE_REASON};
