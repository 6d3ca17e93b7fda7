//! Chat-completion providers backing the judge.

mod fake;
mod ollama;

pub use fake::FakeProvider;
pub use ollama::OllamaProvider;

use async_trait::async_trait;

use crate::error::JudgeResult;
use crate::wire::{ChatRequest, ChatResponse};

/// Transport seam between the judge and a chat-completion service.
///
/// The judge issues exactly one `chat` call per evaluation and expects the
/// full non-streamed envelope back.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> JudgeResult<ChatResponse>;

    /// Short provider identifier used in logs.
    fn name(&self) -> &'static str;
}
