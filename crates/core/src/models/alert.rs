use crate::models::metadata::TokenMetadata;
use bigdecimal::BigDecimal;

/// An event that cleared the threshold and was enriched with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityAlert {
    pub source: String,
    pub signature: String,
    /// Already rendered in the alert timezone
    pub timestamp: String,
    pub traded_mint: String,
    pub usd_value: BigDecimal,
    pub metadata: TokenMetadata,
}
