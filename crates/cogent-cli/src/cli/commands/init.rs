use std::path::Path;

use cogent_core::JudgeConfig;

use crate::cli::args::InitArgs;
use crate::exit_codes;

/// Sample exchange written by `cogent init`. The assistant turn is a
/// coherent answer, so a stock judge should return `makesSense: true`.
const SAMPLE_EXCHANGE: &str = r#"{
  "messages": [
    {
      "role": "user",
      "content": "Can you help me find information about database backups?"
    },
    {
      "role": "assistant",
      "content": "I can help you find information about database backups. Here are some key topics to explore:\n\n1. **Backup Types**: Full backups, incremental backups, and differential backups\n2. **Backup Strategies**: Regular scheduling, retention policies, and 3-2-1 rule\n3. **Tools**: pg_dump for PostgreSQL, mysqldump for MySQL, or cloud-based solutions\n4. **Best Practices**: Test restore procedures, encrypt sensitive data, store offsite\n\nWhat specific aspect of database backups would you like to know more about?"
    }
  ],
  "seed": 42
}
"#;

pub async fn run(args: InitArgs) -> anyhow::Result<i32> {
    write_file_if_missing(&args.out, SAMPLE_EXCHANGE)?;

    let config_path = Path::new("cogent.yaml");
    if config_path.exists() {
        println!("Skipped {} (exists)", config_path.display());
    } else {
        JudgeConfig::write_sample(config_path)?;
        println!("Created {}", config_path.display());
    }

    println!();
    println!(
        "Next: start your judge model (e.g. `ollama pull gemma2:2b`), then run: cogent check --file {}",
        args.out.display()
    );
    Ok(exit_codes::SUCCESS)
}

fn write_file_if_missing(path: &Path, contents: &str) -> anyhow::Result<()> {
    if path.exists() {
        println!("Skipped {} (exists)", path.display());
        return Ok(());
    }
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", path.display(), e))?;
    println!("Created {}", path.display());
    Ok(())
}
