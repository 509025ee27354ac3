//! # Birdeye SOL Price
//!
//! Spot price lookups against Birdeye's public price endpoint
//! (`GET /public/price?address=<mint>`). Every call goes to the network:
//! there is no cache and no retry, a failed lookup fails the request that
//! asked for it.
//!
//! ```rust,no_run
//! use lpwatch_core::PriceOracle;
//! use lpwatch_sol_price::{BirdeyePriceOracle, DEFAULT_BIRDEYE_API_URL};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let base_url = url::Url::parse(DEFAULT_BIRDEYE_API_URL)?;
//! let oracle = BirdeyePriceOracle::new(reqwest::Client::new(), &base_url, "api-key")?;
//! let price = oracle.spot_price().await?;
//! println!("Current SOL price: ${price}");
//! # Ok(())
//! # }
//! ```

use crate::constants::{BIRDEYE_API_KEY_HEADER, BIRDEYE_PRICE_PATH};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};
use lpwatch_core::{round_usd, PriceError, PriceOracle, WSOL_MINT_KEY_STR};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Deserialize)]
struct BirdeyePriceResponse {
    #[serde(default)]
    success: Option<bool>,
    data: Option<BirdeyePriceData>,
}

#[derive(Debug, Deserialize)]
struct BirdeyePriceData {
    value: Option<serde_json::Number>,
}

#[derive(Debug, Clone)]
pub struct BirdeyePriceOracle {
    client: reqwest::Client,
    price_url: Url,
    api_key: String,
}

impl BirdeyePriceOracle {
    /// `client` should carry the request timeout; it is shared with the other outbound calls.
    pub fn new(
        client: reqwest::Client,
        base_url: &Url,
        api_key: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let price_url =
            Url::parse(&format!("{}/{BIRDEYE_PRICE_PATH}", base_url.as_str().trim_end_matches('/')))?;
        Ok(Self { client, price_url, api_key: api_key.into() })
    }

    /// USD price of `mint`, rounded to cents
    #[instrument(skip(self))]
    pub async fn fetch_price(&self, mint: &str) -> Result<BigDecimal, PriceError> {
        let response = self
            .client
            .get(self.price_url.clone())
            .query(&[("address", mint)])
            .header(BIRDEYE_API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| PriceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Status(status.as_u16()));
        }

        let body: BirdeyePriceResponse =
            response.json().await.map_err(|e| PriceError::InvalidResponse(e.to_string()))?;
        if body.success == Some(false) {
            return Err(PriceError::InvalidResponse("success=false".to_string()));
        }
        let value = body
            .data
            .and_then(|data| data.value)
            .ok_or_else(|| PriceError::InvalidResponse("missing data.value".to_string()))?;
        let price = BigDecimal::from_str(&value.to_string())
            .map_err(|e| PriceError::InvalidResponse(e.to_string()))?;
        if price < BigDecimal::zero() {
            return Err(PriceError::InvalidResponse(format!("negative price {price}")));
        }

        let price = round_usd(&price);
        debug!(mint, %price, "Fetched spot price");
        Ok(price)
    }
}

#[async_trait]
impl PriceOracle for BirdeyePriceOracle {
    async fn spot_price(&self) -> Result<BigDecimal, PriceError> {
        self.fetch_price(WSOL_MINT_KEY_STR).await
    }
}
