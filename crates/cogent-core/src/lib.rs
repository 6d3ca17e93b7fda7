//! Semantic-coherence judge for conversational exchanges.
//!
//! Given a role-tagged message history, this crate asks a locally hosted
//! language model whether the final assistant reply is internally coherent
//! and responsive, and decodes the structured reply into a [`Verdict`]:
//!
//! - prompt construction (built-in coherence rubric or a caller-supplied
//!   evaluation context)
//! - one chat-completion call per evaluation, streaming disabled, with a
//!   required structured-output schema and deterministic sampling controls
//! - strict verdict decoding: infrastructure faults are never downgraded
//!   to a default verdict
//!
//! Fictional, mystical, and roleplay content is valid subject matter: the
//! judge checks internal consistency, not factual truth.
//!
//! # Quick Start
//!
//! ```no_run
//! use cogent_core::{evaluate, Exchange, JudgeConfig, Message};
//!
//! # async fn example() -> cogent_core::JudgeResult<()> {
//! let exchange = Exchange::new(vec![
//!     Message::user("Can you help me find information about database backups?"),
//!     Message::assistant(
//!         "Of course. The main strategies are full, incremental, and differential backups.",
//!     ),
//! ])
//! .with_seed(42);
//!
//! let verdict = evaluate(&exchange, &JudgeConfig::default()).await?;
//! println!("makes sense: {} ({})", verdict.makes_sense, verdict.reasoning);
//! # Ok(())
//! # }
//! ```
//!
//! Tests inject a scripted transport instead of a live model:
//!
//! ```
//! use std::sync::Arc;
//! use cogent_core::{FakeProvider, Judge, JudgeConfig};
//!
//! let fake = Arc::new(FakeProvider::incoherent("word salad"));
//! let judge = Judge::with_provider(JudgeConfig::default(), fake);
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `COGENT_ENDPOINT` | Chat-completion endpoint (default: `http://localhost:11434/api/chat`) |
//! | `COGENT_MODEL` | Judge model identifier (default: `gemma2:2b`) |
//! | `COGENT_TEMPERATURE` | Sampling temperature (default: 0.3) |
//! | `COGENT_SYSTEM_PROMPT` | Custom evaluation context replacing the rubric |
//! | `COGENT_TIMEOUT_SECS` | Request timeout in seconds (default: none) |

pub mod config;
pub mod error;
pub mod judge;
pub mod model;
mod prompt;
pub mod providers;
pub mod wire;

// Re-export main types
pub use config::JudgeConfig;
pub use error::{JudgeError, JudgeResult};
pub use judge::{evaluate, Judge};
pub use model::{Exchange, Message, Role, Verdict};
pub use providers::{ChatProvider, FakeProvider, OllamaProvider};
pub use wire::{verdict_schema, ChatMessage, ChatRequest, ChatResponse, SamplerOptions};
