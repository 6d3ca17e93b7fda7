//! Judge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JudgeError, JudgeResult};

/// Sample configuration written by `JudgeConfig::write_sample`.
const SAMPLE_CONFIG: &str = "\
# Cogent judge configuration. Every field is optional.

# Chat-completion endpoint of the judge model.
endpoint: \"http://localhost:11434/api/chat\"

# Judge model identifier.
model: \"gemma2:2b\"

# Sampling temperature. Low values favor stable verdicts.
temperature: 0.3

# Uncomment to replace the built-in coherence rubric with your own
# evaluation context.
#system_prompt: \"The assistant is a dungeon master narrating a fantasy world.\"

# Uncomment to put a deadline on the judgment request.
#timeout_secs: 60
";

/// Judge configuration.
///
/// All fields have defaults; a partial YAML file or environment rounds out
/// with the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Chat-completion endpoint of the judge model.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Judge model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Caller-supplied evaluation context. When set, it replaces the
    /// built-in coherence rubric in the instruction sent to the judge.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Request timeout in seconds. `None` leaves the transport without a
    /// deadline; callers that want one set it here or wrap the call.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "http://localhost:11434/api/chat".to_string()
}

fn default_model() -> String {
    "gemma2:2b".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: None,
            timeout_secs: None,
        }
    }
}

impl JudgeConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `COGENT_ENDPOINT` | Chat-completion endpoint |
    /// | `COGENT_MODEL` | Judge model identifier |
    /// | `COGENT_TEMPERATURE` | Sampling temperature |
    /// | `COGENT_SYSTEM_PROMPT` | Custom evaluation context |
    /// | `COGENT_TIMEOUT_SECS` | Request timeout in seconds |
    ///
    /// Unparseable numeric values are configuration errors, not silent
    /// fallbacks to the default.
    pub fn from_env() -> JudgeResult<Self> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("COGENT_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("COGENT_MODEL") {
            config.model = model;
        }
        if let Ok(raw) = std::env::var("COGENT_TEMPERATURE") {
            config.temperature = raw.parse().map_err(|e| JudgeError::Config {
                message: format!("COGENT_TEMPERATURE '{}' is not a number: {}", raw, e),
            })?;
        }
        if let Ok(prompt) = std::env::var("COGENT_SYSTEM_PROMPT") {
            config.system_prompt = Some(prompt);
        }
        if let Ok(raw) = std::env::var("COGENT_TIMEOUT_SECS") {
            let secs = raw.parse().map_err(|e| JudgeError::Config {
                message: format!("COGENT_TIMEOUT_SECS '{}' is not an integer: {}", raw, e),
            })?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }

    /// Load configuration from a YAML file. Missing fields take defaults.
    pub fn load(path: &Path) -> JudgeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| JudgeError::Config {
            message: format!("failed to read config {}: {}", path.display(), e),
        })?;
        serde_yaml::from_str(&raw).map_err(|e| JudgeError::Config {
            message: format!("failed to parse config {}: {}", path.display(), e),
        })
    }

    /// Write a commented sample configuration.
    pub fn write_sample(path: &Path) -> JudgeResult<()> {
        std::fs::write(path, SAMPLE_CONFIG).map_err(|e| JudgeError::Config {
            message: format!("failed to write sample config {}: {}", path.display(), e),
        })
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replace the default coherence rubric with a custom context.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set a request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
