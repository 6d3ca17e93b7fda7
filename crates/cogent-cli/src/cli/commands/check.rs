//! Evaluate one exchange file and print the verdict.

use std::path::Path;

use cogent_core::{Exchange, Judge, JudgeConfig};

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::exit_codes;

pub async fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let config = resolve_config(&args)?;
    tracing::debug!(endpoint = %config.endpoint, model = %config.model, "resolved judge config");

    let mut exchange = load_exchange(&args.file)?;
    if args.seed.is_some() {
        exchange.seed = args.seed;
    }

    let judge = Judge::new(config)?;
    let verdict = match judge.evaluate(&exchange).await {
        Ok(verdict) => verdict,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(e.exit_code());
        }
    };

    match args.output {
        OutputFormat::Text => {
            if verdict.makes_sense {
                println!("verdict: makes sense");
            } else {
                println!("verdict: does not make sense");
            }
            println!("reasoning: {}", verdict.reasoning);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdict)?),
    }

    if verdict.makes_sense {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::INCOHERENT)
    }
}

/// Defaults, then the config file, then env/flags (clap resolves the
/// env-vs-flag half: a flag beats its environment variable).
fn resolve_config(args: &CheckArgs) -> anyhow::Result<JudgeConfig> {
    let mut config = match &args.config {
        Some(path) => JudgeConfig::load(path)?,
        None => {
            let default_path = Path::new("cogent.yaml");
            if default_path.exists() {
                JudgeConfig::load(default_path)?
            } else {
                JudgeConfig::default()
            }
        }
    };

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(temperature) = args.temperature {
        config.temperature = temperature;
    }
    if let Some(prompt) = &args.system_prompt {
        config.system_prompt = Some(prompt.clone());
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout_secs = Some(secs);
    }

    Ok(config)
}

fn load_exchange(path: &Path) -> anyhow::Result<Exchange> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read exchange {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse exchange {}: {}", path.display(), e))
}
