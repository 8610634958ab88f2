//! ghteams - Keep GitHub organization teams in line with a YAML document

use clap::Parser;

mod cli;
mod client;
mod config;
mod document;
mod error;
mod output;
mod sync;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    match &cli.command {
        Some(Commands::Invite { members }) => cli::invite::run(&opts, members).await,
        None if cli.download => cli::sync::download(&opts).await,
        None => cli::sync::reconcile(&opts, &cli.teams).await,
    }
}

/// `RUST_LOG` wins; `--debug` raises the default from warnings to debug.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
