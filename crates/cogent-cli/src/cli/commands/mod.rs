use super::args::*;

pub mod check;
pub mod init;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Init(args) => init::run(args).await,
        Command::Check(args) => check::run(args).await,
    }
}
