use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "cogent",
    version,
    about = "Ask a local judge model whether a conversational exchange makes sense"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a sample exchange file and a sample cogent.yaml
    Init(InitArgs),
    /// Evaluate an exchange file and print the verdict
    Check(CheckArgs),
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the sample exchange
    #[arg(long, default_value = "exchange.json")]
    pub out: PathBuf,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    /// Exchange file to evaluate (JSON: {"messages": [...], "seed": N})
    #[arg(long)]
    pub file: PathBuf,

    /// Config file (YAML). Without this flag, cogent.yaml is used when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chat-completion endpoint of the judge model
    #[arg(long, env = "COGENT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Judge model identifier
    #[arg(long, env = "COGENT_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, env = "COGENT_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Deterministic sampling seed (overrides the seed in the exchange file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replace the built-in coherence rubric with a custom evaluation context
    #[arg(long, env = "COGENT_SYSTEM_PROMPT")]
    pub system_prompt: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "COGENT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
