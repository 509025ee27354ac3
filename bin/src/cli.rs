use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_otel_extra::Logger;

use crate::commands::{replay, serve};

#[derive(Parser)]
#[clap(version, about, propagate_version = true)]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn from_env_and_args() -> Self {
        dotenv().ok();
        Self::parse()
    }
}

/// Relay significant Solana liquidity-pool launches to Discord.
///
/// See `lpwatch --help` for more information.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "serve", about = "Start the webhook server")]
    Serve(serve::Command),
    #[command(name = "replay", about = "Run a saved webhook payload through the pipeline")]
    Replay(replay::Command),
}

/// Parse CLI options, set up logging and run the chosen command.
pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::from_env_and_args();
    let guard = Logger::from_env(None)?.init().expect("Failed to initialize logging");

    match opt.command {
        Commands::Serve(command) => command.execute().await?,
        Commands::Replay(command) => command.execute().await?,
    }
    drop(guard);
    Ok(())
}
