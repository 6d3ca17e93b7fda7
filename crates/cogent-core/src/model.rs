//! Conversation and verdict types.

use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// One conversation turn. Order within an exchange is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// The conversation submitted for evaluation.
///
/// The last entry is conventionally the assistant response under test. The
/// judge borrows it read-only; nothing is retained between evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Ordered message history. Must be non-empty.
    pub messages: Vec<Message>,

    /// Sampling seed forwarded verbatim to the judge, for reproducible
    /// verdicts. Omitted from the wire when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Exchange {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            seed: None,
        }
    }

    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of one coherence evaluation.
///
/// Field names follow the structured-output schema the judge is asked to
/// fill (`makesSense` / `reasoning`), so the decoded reply and any JSON
/// output share one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the final assistant response is coherent and responsive.
    pub makes_sense: bool,

    /// The judge's own justification.
    pub reasoning: String,
}
