//! Coherence evaluation.

use std::sync::Arc;

use tracing::debug;

use crate::config::JudgeConfig;
use crate::error::{JudgeError, JudgeResult};
use crate::model::{Exchange, Message, Verdict};
use crate::prompt;
use crate::providers::{ChatProvider, OllamaProvider};
use crate::wire::{verdict_schema, ChatRequest, SamplerOptions};

/// Asks a chat-completion judge whether the final assistant reply in an
/// exchange makes sense.
///
/// A judge is cheap to build, holds no state between evaluations, and can be
/// shared across tasks; concurrent evaluations are independent.
#[derive(Clone)]
pub struct Judge {
    config: JudgeConfig,
    provider: Arc<dyn ChatProvider>,
}

impl Judge {
    /// Create a judge talking to the configured HTTP endpoint.
    pub fn new(config: JudgeConfig) -> JudgeResult<Self> {
        let provider = Arc::new(OllamaProvider::new(&config)?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create a judge with an injected provider.
    pub fn with_provider(config: JudgeConfig, provider: Arc<dyn ChatProvider>) -> Self {
        Self { config, provider }
    }

    /// The configuration this judge evaluates with.
    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Evaluate one exchange and decode the judge's verdict.
    ///
    /// Exactly one outbound call per invocation; faults propagate unchanged
    /// and are never downgraded to a default verdict.
    pub async fn evaluate(&self, exchange: &Exchange) -> JudgeResult<Verdict> {
        if exchange.messages.is_empty() {
            return Err(JudgeError::EmptyExchange);
        }

        let instruction = prompt::build_instruction(self.config.system_prompt.as_deref());

        let mut messages = exchange.messages.clone();
        messages.push(Message::system(instruction));

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            format: verdict_schema(),
            stream: false,
            options: SamplerOptions {
                seed: exchange.seed,
                temperature: self.config.temperature,
            },
        };

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            seed = ?exchange.seed,
            temperature = request.options.temperature,
            turns = exchange.messages.len(),
            "evaluating exchange coherence"
        );

        let response = self.provider.chat(&request).await?;

        let verdict: Verdict =
            serde_json::from_str(&response.message.content).map_err(|e| JudgeError::Decode {
                message: format!("judge reply is not a valid verdict object: {}", e),
            })?;

        debug!(makes_sense = verdict.makes_sense, "verdict decoded");
        Ok(verdict)
    }
}

/// Evaluate one exchange with a one-off judge.
pub async fn evaluate(exchange: &Exchange, config: &JudgeConfig) -> JudgeResult<Verdict> {
    Judge::new(config.clone())?.evaluate(exchange).await
}
