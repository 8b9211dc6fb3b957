//! AI gateway: the façade every part of the app goes through to reach the model.
//!
//! Each operation builds one prompt, makes at most one request and always
//! returns a usable value. Failures are logged and replaced with fixed
//! fallback text; nothing is retried and no error reaches the caller.

use tracing::{debug, error, warn};

use crate::Error;
use crate::core::ai::{GenerationRequest, Generator, Provider};
use crate::core::moderation::ModerationResult;
use crate::core::quiz::{QuizBand, clamp_score};

pub const REPLY_FALLBACK: &str = "Thank you for sharing this. It takes courage to open up, \
and you're not alone in feeling this way.";
pub const QUIZ_FALLBACK: &str = "Thanks for checking in with yourself today. \
Whatever your score, be kind to yourself and reach out if you need support.";

const MODERATION_SYSTEM: &str = "You are a caring content moderator for ZenVibe, \
a peer-support community for teenagers. You protect young users while staying warm and non-judgmental.";

const PEER_SYSTEM: &str = "You are a kind, supportive peer in ZenVibe, \
a peer-support community for teenagers. You sound like a friend, not a therapist.";

/// The process-wide client handle. Built once at startup and never upgraded.
pub enum ClientHandle {
    Unavailable,
    Available(Box<dyn Generator>),
}

impl ClientHandle {
    /// Reads nothing from the environment itself; the caller resolves the key.
    pub fn init(provider: Provider, api_key: Option<String>, model: Option<String>) -> Self {
        let Some(api_key) = api_key else {
            warn!(
                provider = provider.name(),
                "no API key configured; AI features are unavailable"
            );
            return ClientHandle::Unavailable;
        };

        match provider.client(api_key, model) {
            Ok(client) => {
                debug!(provider = client.name(), model = client.model(), "ai client ready");
                ClientHandle::Available(client)
            }
            Err(e) => {
                error!(provider = provider.name(), error = %e, "could not build ai client");
                ClientHandle::Unavailable
            }
        }
    }
}

pub struct Gateway {
    handle: ClientHandle,
}

impl Gateway {
    pub fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    pub fn unavailable() -> Self {
        Self::new(ClientHandle::Unavailable)
    }

    pub fn with_generator(generator: impl Generator + 'static) -> Self {
        Self::new(ClientHandle::Available(Box::new(generator)))
    }

    pub fn is_available(&self) -> bool {
        matches!(self.handle, ClientHandle::Available(_))
    }

    /// `(provider, model)` of the live client.
    pub fn backend(&self) -> Option<(&str, &str)> {
        self.generator().map(|g| (g.name(), g.model()))
    }

    fn generator(&self) -> Option<&dyn Generator> {
        match &self.handle {
            ClientHandle::Available(g) => Some(g.as_ref()),
            ClientHandle::Unavailable => None,
        }
    }

    pub async fn moderate_content(&self, content: &str) -> ModerationResult {
        let Some(generator) = self.generator() else {
            return ModerationResult::unavailable();
        };

        let request = GenerationRequest::new(moderation_prompt(content))
            .with_system(MODERATION_SYSTEM)
            .with_schema(ModerationResult::schema());

        let verdict = generator
            .generate(&request)
            .await
            .and_then(|text| ModerationResult::parse(&text));

        match verdict {
            Ok(result) => {
                debug!(
                    positive = result.is_positive,
                    severe = result.is_severe,
                    "moderation verdict"
                );
                result
            }
            Err(e) => {
                error!(error = %e, "moderation request failed");
                ModerationResult::failed()
            }
        }
    }

    pub async fn generate_supportive_reply(&self, post_content: &str) -> String {
        let Some(generator) = self.generator() else {
            return REPLY_FALLBACK.to_string();
        };

        let request = GenerationRequest::new(reply_prompt(post_content)).with_system(PEER_SYSTEM);

        match generator.generate(&request).await.and_then(|text| unquoted(&text)) {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "supportive reply request failed");
                REPLY_FALLBACK.to_string()
            }
        }
    }

    pub async fn get_quiz_feedback(&self, score: f64) -> String {
        let clamped = clamp_score(score);
        if clamped != score {
            warn!(score, clamped, "quiz score out of range");
        }

        let Some(generator) = self.generator() else {
            return QUIZ_FALLBACK.to_string();
        };

        let request = GenerationRequest::new(quiz_prompt(clamped)).with_system(PEER_SYSTEM);

        match generator.generate(&request).await.and_then(|text| unquoted(&text)) {
            Ok(feedback) => feedback,
            Err(e) => {
                error!(error = %e, "quiz feedback request failed");
                QUIZ_FALLBACK.to_string()
            }
        }
    }
}

pub fn moderation_prompt(content: &str) -> String {
    format!(
        r#"Review the following message that a teenager wants to post in a peer-support community.

Decide:
1. isPositive: is the message positive, supportive, or otherwise safe and appropriate for teens? Sharing sadness or struggles honestly is allowed. Bullying, hate, harassment, explicit content, or encouraging harm is not.
2. reason: if the message is not positive, gently explain why in one or two sentences, addressed to the author, without shaming them. If it is positive, use an empty string.
3. isSevere: set to true ONLY if the message shows explicit, immediate and concrete intent to harm themselves or someone else (for example a stated plan or means). Vague sadness, feeling down, or being stressed is NOT severe.

Message:
{content}"#
    )
}

pub fn reply_prompt(post_content: &str) -> String {
    format!(
        r#"Someone in the community posted this:

{post_content}

Write a short supportive reply (2-3 sentences) in a warm, casual peer tone. Validate their feelings and let them know they're not alone. Do not give advice or tell them what to do. Reply with the message text only."#
    )
}

pub fn quiz_prompt(score: f64) -> String {
    let tone = match QuizBand::from_score(score) {
        QuizBand::Struggling => {
            "They seem to be struggling a lot right now. Gently acknowledge that things sound hard, and remind them it's okay to ask for help."
        }
        QuizBand::Journey => {
            "They're dealing with some stress. Encourage them and remind them that wellbeing is a journey with ups and downs."
        }
        QuizBand::Thriving => {
            "They seem to be doing well. Celebrate that with them and encourage them to keep up what's working."
        }
    };

    format!(
        "A teenager just finished a 10-question stress check and scored {score} out of 10 \
         (higher means more stress). {tone} Write 1-2 sentences speaking directly to them. \
         Reply with the message text only."
    )
}

// a reply that was nothing but quotes counts as no reply
fn unquoted(text: &str) -> Result<String, Error> {
    match strip_wrapping_quotes(text) {
        "" => Err(Error::EmptyResponse("model")),
        reply => Ok(reply.to_string()),
    }
}

/// Trims the text and drops one pair of surrounding double quotes, if present.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}
