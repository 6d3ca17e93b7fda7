//! Wire types for the chat-completion protocol.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::Message;

/// Chat-completion request body.
///
/// The message list is the caller's exchange plus one trailing `system`
/// instruction carrying the evaluation prompt. Streaming is always disabled:
/// the verdict must arrive as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Structured-output schema the judge reply must conform to.
    pub format: serde_json::Value,
    pub stream: bool,
    pub options: SamplerOptions,
}

/// Sampling controls forwarded to the judge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Omitted from the body entirely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub temperature: f32,
}

/// Schema constraining the judge reply to a verdict object.
pub fn verdict_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "makesSense": { "type": "boolean" },
            "reasoning": { "type": "string" }
        },
        "required": ["makesSense", "reasoning"]
    })
}

/// Chat-completion response envelope.
///
/// Only `message` is consumed; extra envelope fields (model, timings, done
/// flags) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

/// The assistant message inside the response envelope.
///
/// `content` is itself a JSON-encoded verdict object. The role is kept as a
/// plain string so envelope parsing never fails on an unexpected speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}
