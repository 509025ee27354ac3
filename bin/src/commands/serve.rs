use clap::Parser;
use lpwatch_api::{init_api, Settings};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "lpwatch webhook server")]
pub struct Command {
    #[command(flatten)]
    settings: Settings,
}

impl Command {
    /// Execute `serve` command
    pub async fn execute(self) -> anyhow::Result<()> {
        info!(settings = ?self.settings, "Starting lpwatch");
        init_api(&self.settings).await?;
        Ok(())
    }
}
