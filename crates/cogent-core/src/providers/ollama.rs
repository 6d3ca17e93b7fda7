//! HTTP provider for Ollama-compatible chat endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use super::ChatProvider;
use crate::config::JudgeConfig;
use crate::error::{JudgeError, JudgeResult};
use crate::wire::{ChatRequest, ChatResponse};

/// User agent for judgment requests.
const USER_AGENT_VALUE: &str = concat!("cogent/", env!("CARGO_PKG_VERSION"));

/// Provider speaking the Ollama `/api/chat` protocol.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    /// HTTP client.
    client: reqwest::Client,

    /// Parsed chat endpoint.
    endpoint: reqwest::Url,
}

impl OllamaProvider {
    /// Create a provider for the configured endpoint.
    ///
    /// The endpoint URL is validated here so a bad address fails before any
    /// wire activity. A `timeout_secs` in the config becomes the client
    /// deadline; without one, requests wait as long as the judge takes.
    pub fn new(config: &JudgeConfig) -> JudgeResult<Self> {
        let endpoint =
            reqwest::Url::parse(&config.endpoint).map_err(|e| JudgeError::Config {
                message: format!("invalid endpoint URL '{}': {}", config.endpoint, e),
            })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| JudgeError::Network {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    async fn chat(&self, request: &ChatRequest) -> JudgeResult<ChatResponse> {
        debug!(endpoint = %self.endpoint, model = %request.model, "dispatching judgment request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            warn!(status = status.as_u16(), "judgment endpoint returned error status");
            return Err(JudgeError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| JudgeError::Decode {
                message: format!("failed to parse chat response envelope: {}", e),
            })
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
