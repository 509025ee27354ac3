//! Process configuration, assembled once at startup.
//!
//! Every option can be given as a flag or through the environment (a `.env`
//! file is loaded first). Component constructors receive values from here;
//! nothing below this layer reads the environment.
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use chrono_tz::Tz;
use clap::Args;
use lpwatch_core::{AlertSink, Pipeline, PipelineConfig, ValuationMode};
use lpwatch_discord::{DiscordWebhook, StdoutSink};
use lpwatch_sol_price::{BirdeyePriceOracle, DEFAULT_BIRDEYE_API_URL};
use lpwatch_token_metadata::{helius_rpc_url, make_rpc_client, MetaplexMetadataSource};
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
    time::Duration,
};
use tracing::debug;
use url::Url;

/// Where composed alerts go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Discord,
    Stdout,
}

#[derive(Clone, Args)]
pub struct Settings {
    /// Http port to listen on
    #[arg(long, default_value_t = 8787, env = "PORT")]
    pub port: u16,

    /// Discord webhook receiving the alerts
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub discord_webhook_url: Url,

    /// Birdeye API key
    #[arg(long, env = "BE_KEY", hide_env_values = true)]
    pub birdeye_api_key: String,

    /// Helius API key, used for the chain rpc connection
    #[arg(long, env = "HELIUS_API", hide_env_values = true)]
    pub helius_api_key: String,

    /// Rpc url overriding the Helius mainnet endpoint
    #[arg(long, env = "SOLANA_RPC_URL", hide_env_values = true)]
    pub rpc_url: Option<String>,

    /// Birdeye API base url
    #[arg(long, env = "BIRDEYE_API_URL", default_value = DEFAULT_BIRDEYE_API_URL)]
    pub birdeye_api_url: Url,

    /// Minimum liquidity added, in USD, that triggers an alert
    #[arg(long, env = "MIN_USD_THRESHOLD", default_value = "1500")]
    pub min_usd_threshold: BigDecimal,

    /// `truncate` drops fractions before multiplying, `exact` keeps them
    #[arg(long, env = "VALUATION_MODE", default_value = "truncate")]
    pub valuation_mode: ValuationMode,

    /// IANA timezone alert timestamps are rendered in
    #[arg(long = "timezone", env = "ALERT_TIMEZONE", default_value = "Asia/Manila")]
    pub timezone: Tz,

    /// Timeout applied to every outbound request
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,
}

// keys and the webhook token stay out of logs
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("port", &self.port)
            .field("discord_webhook_host", &self.discord_webhook_url.host_str())
            .field("rpc_url_override", &self.rpc_url.is_some())
            .field("birdeye_api_url", &self.birdeye_api_url.as_str())
            .field("min_usd_threshold", &self.min_usd_threshold.to_string())
            .field("valuation_mode", &self.valuation_mode)
            .field("timezone", &self.timezone)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn rpc_url(&self) -> String {
        self.rpc_url.clone().unwrap_or_else(|| helius_rpc_url(&self.helius_api_key))
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            min_usd_threshold: self.min_usd_threshold.clone(),
            valuation_mode: self.valuation_mode,
            timezone: self.timezone,
        }
    }

    /// Wire the outbound clients into a pipeline. The http and rpc clients are
    /// created once here and shared by every request.
    pub fn build_pipeline(&self, delivery: Delivery) -> Result<Pipeline> {
        debug!(settings = ?self, ?delivery, "Building pipeline");
        let http_client = reqwest::Client::builder()
            .timeout(self.http_timeout())
            .build()
            .context("Failed to build http client")?;

        let price_oracle = BirdeyePriceOracle::new(
            http_client.clone(),
            &self.birdeye_api_url,
            self.birdeye_api_key.clone(),
        )
        .context("Invalid Birdeye API url")?;

        let rpc_client = make_rpc_client(&self.rpc_url(), self.http_timeout());
        let metadata_source = MetaplexMetadataSource::new(Arc::new(rpc_client), http_client.clone());

        let alert_sink: Arc<dyn AlertSink> = match delivery {
            Delivery::Discord => {
                Arc::new(DiscordWebhook::new(http_client, self.discord_webhook_url.clone()))
            }
            Delivery::Stdout => Arc::new(StdoutSink),
        };

        Ok(Pipeline::new(
            &self.pipeline_config(),
            Arc::new(price_oracle),
            Arc::new(metadata_source),
            alert_sink,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    const REQUIRED: [&str; 7] = [
        "lpwatch",
        "--discord-webhook-url",
        "https://discord.com/api/webhooks/1/secret-token",
        "--birdeye-api-key",
        "be-secret",
        "--helius-api-key",
        "helius-secret",
    ];

    #[test]
    fn test_defaults() {
        let settings = TestCli::try_parse_from(REQUIRED).expect("failed to parse").settings;

        assert_eq!(settings.port, 8787);
        assert_eq!(settings.listen_addr().to_string(), "0.0.0.0:8787");
        assert_eq!(settings.min_usd_threshold, BigDecimal::from(1500));
        assert_eq!(settings.valuation_mode, ValuationMode::Truncate);
        assert_eq!(settings.timezone, chrono_tz::Asia::Manila);
        assert_eq!(settings.http_timeout(), Duration::from_secs(10));
        assert_eq!(settings.rpc_url(), "https://mainnet.helius-rpc.com/?api-key=helius-secret");
        assert_eq!(settings.birdeye_api_url.as_str(), "https://public-api.birdeye.so/");
    }

    #[test]
    fn test_overrides() {
        let args = REQUIRED.into_iter().chain([
            "--port",
            "9000",
            "--min-usd-threshold",
            "2500.50",
            "--valuation-mode",
            "exact",
            "--timezone",
            "UTC",
            "--rpc-url",
            "http://127.0.0.1:8899",
        ]);
        let settings = TestCli::try_parse_from(args).expect("failed to parse").settings;

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.pipeline_config().valuation_mode, ValuationMode::Exact);
        assert_eq!(settings.pipeline_config().timezone, chrono_tz::UTC);
        assert_eq!(settings.rpc_url(), "http://127.0.0.1:8899");
        assert_eq!(settings.min_usd_threshold.to_string(), "2500.50");
    }

    #[test]
    fn test_rejects_invalid_values() {
        let args = REQUIRED.into_iter().chain(["--timezone", "Mars/Olympus"]);
        assert!(TestCli::try_parse_from(args).is_err());

        let args = REQUIRED.into_iter().chain(["--valuation-mode", "round"]);
        assert!(TestCli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let settings = TestCli::try_parse_from(REQUIRED).expect("failed to parse").settings;
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("discord.com"));
    }

    #[tokio::test]
    async fn test_build_pipeline() {
        let settings = TestCli::try_parse_from(REQUIRED).expect("failed to parse").settings;
        assert!(settings.build_pipeline(Delivery::Discord).is_ok());
        assert!(settings.build_pipeline(Delivery::Stdout).is_ok());
    }
}
