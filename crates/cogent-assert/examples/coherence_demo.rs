//! Walk two exchanges through the coherence judge.
//!
//! Requires a local Ollama with the default judge model pulled:
//!   ollama pull gemma2:2b
//!   cargo run -p cogent-assert --example coherence_demo

use cogent_assert::to_make_sense;
use cogent_core::{Exchange, Judge, JudgeConfig, Message};

fn main() -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(async {
        let judge = Judge::new(JudgeConfig::default())?;

        let coherent = Exchange::new(vec![
            Message::user("Can you help me find information about database backups?"),
            Message::assistant(
                "Of course. The three common strategies are full, incremental, and \
                 differential backups. Full backups are simplest to restore, incremental \
                 ones are cheapest to take, and differential backups sit in between.",
            ),
        ])
        .with_seed(42);

        let nonsense = Exchange::new(vec![
            Message::user("What is 2+2?"),
            Message::assistant(
                "The moon is made of cheese and I am a teapot spinning in the void of \
                 eternal darkness",
            ),
        ])
        .with_seed(666);

        for (label, exchange) in [("coherent", &coherent), ("nonsense", &nonsense)] {
            let outcome = to_make_sense(&judge, exchange).await?;
            println!("---------------------------------------------------");
            println!("{}: pass = {}", label, outcome.pass());
            println!("{}", outcome.message());
        }
        println!("---------------------------------------------------");

        Ok(())
    })
}
