use clap::Parser;
use signup_form::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Register(args) => cli::register::run(args).await,
        Command::Validate(args) => cli::validate::run(args).await,
    }
}
