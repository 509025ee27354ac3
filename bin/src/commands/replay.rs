use anyhow::Context;
use clap::Parser;
use lpwatch_api::{Delivery, Settings, WebhookResponse};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "Replay a saved enhanced-transaction webhook body")]
pub struct Command {
    /// File holding the JSON array the indexer would POST
    pub file: PathBuf,

    /// Print the composed Discord payload instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    settings: Settings,
}

impl Command {
    /// Execute `replay` command
    pub async fn execute(self) -> anyhow::Result<()> {
        let body = tokio::fs::read(&self.file)
            .await
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let delivery = if self.dry_run { Delivery::Stdout } else { Delivery::Discord };
        let pipeline = self.settings.build_pipeline(delivery)?;
        info!(file = %self.file.display(), ?delivery, "Replaying webhook payload");

        let outcome = pipeline.process(&body).await.context("Pipeline failed")?;
        let response = WebhookResponse::from(outcome);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
