use lpwatch_core::PriceOracle;
use lpwatch_sol_price::{BirdeyePriceOracle, DEFAULT_BIRDEYE_API_URL};
use std::{env::var, time::Duration};
use tracing_otel_extra::init_logging;
use url::Url;

/// Fetch the current SOL price once and print it
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let name = env!("CARGO_PKG_NAME");
    init_logging(name).expect("Failed to initialize logging");

    let api_key = var("BE_KEY")?;
    let base_url = Url::parse(
        &var("BIRDEYE_API_URL").unwrap_or_else(|_| DEFAULT_BIRDEYE_API_URL.to_string()),
    )?;
    let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;

    let oracle = BirdeyePriceOracle::new(client, &base_url, api_key)?;
    let price = oracle.spot_price().await?;
    println!("SOL price: ${price}");
    Ok(())
}
