// moderation verdicts and the strict parser for model output

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;
use crate::core::ai::{FieldKind, ResponseSchema};

pub const UNAVAILABLE_REASON: &str = "Moderation service is currently unavailable.";
pub const FAILURE_REASON: &str = "Could not check your message at this time. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModerationResult {
    pub is_positive: bool,
    pub reason: String,
    pub is_severe: bool,
}

impl ModerationResult {
    pub fn unavailable() -> Self {
        Self {
            is_positive: false,
            reason: UNAVAILABLE_REASON.to_string(),
            is_severe: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            is_positive: false,
            reason: FAILURE_REASON.to_string(),
            is_severe: false,
        }
    }

    pub fn schema() -> ResponseSchema {
        ResponseSchema::new()
            .field(
                "isPositive",
                FieldKind::Boolean,
                "True if the message is positive, supportive, or otherwise safe for a teen audience.",
            )
            .field(
                "reason",
                FieldKind::String,
                "If not positive, a short gentle explanation written to the author. Empty otherwise.",
            )
            .field(
                "isSevere",
                FieldKind::Boolean,
                "True ONLY for explicit, immediate, concrete intent to harm oneself or others.",
            )
    }

    /// Parses the model's JSON answer. Exactly `isPositive`, `reason` and
    /// `isSevere` must be present with the right types; anything else is an error.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_str(strip_code_fence(text)).map_err(|e| Error::Schema(e.to_string()))?;

        // serde would happily read a struct from an array
        if !value.is_object() {
            return Err(Error::Schema("expected a JSON object".to_string()));
        }

        serde_json::from_value(value).map_err(|e| Error::Schema(e.to_string()))
    }
}

// models sometimes wrap json in markdown code blocks
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => rest
            .trim_start_matches("json")
            .trim_end()
            .trim_end_matches("```")
            .trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_with_language_tag() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn bare_fence() {
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
    }

    #[test]
    fn no_fence_is_trimmed_only() {
        assert_eq!(strip_code_fence("  {\"x\": true} "), "{\"x\": true}");
    }
}
