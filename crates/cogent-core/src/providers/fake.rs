//! Scripted provider for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::ChatProvider;
use crate::error::JudgeResult;
use crate::wire::{ChatMessage, ChatRequest, ChatResponse};

/// In-memory provider returning a scripted reply and recording every
/// request it receives.
#[derive(Debug, Default)]
pub struct FakeProvider {
    content: Option<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the raw `message.content` of every reply.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a positive verdict with the given reasoning.
    pub fn coherent(reasoning: &str) -> Self {
        Self::with_content(
            serde_json::json!({ "makesSense": true, "reasoning": reasoning }).to_string(),
        )
    }

    /// Script a negative verdict with the given reasoning.
    pub fn incoherent(reasoning: &str) -> Self {
        Self::with_content(
            serde_json::json!({ "makesSense": false, "reasoning": reasoning }).to_string(),
        )
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    async fn chat(&self, request: &ChatRequest) -> JudgeResult<ChatResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let content = self.content.clone().unwrap_or_else(|| {
            serde_json::json!({ "makesSense": true, "reasoning": "scripted default" })
                .to_string()
        });

        Ok(ChatResponse {
            message: ChatMessage {
                role: "assistant".to_string(),
                content,
            },
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
