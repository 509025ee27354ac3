//! Seams between the pipeline and the outside world.
//!
//! Implementations must be safe to share across concurrently running requests.
use crate::{
    errors::{DispatchError, MetadataError, PriceError},
    models::{message::AlertMessage, metadata::TokenMetadata},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;

#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Current USD spot price of wrapped SOL, rounded to cents
    async fn spot_price(&self) -> Result<BigDecimal, PriceError>;
}

#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn token_metadata(&self, mint: &str) -> Result<TokenMetadata, MetadataError>;
}

#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn dispatch(&self, message: &AlertMessage) -> Result<(), DispatchError>;
}
