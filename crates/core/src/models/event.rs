use bigdecimal::BigDecimal;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// A single token movement inside an indexed transaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub mint: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub token_amount: BigDecimal,
    #[serde(default)]
    pub from_user_account: Option<String>,
    #[serde(default)]
    pub to_user_account: Option<String>,
}

impl TokenTransfer {
    pub fn new(mint: impl Into<String>, token_amount: BigDecimal) -> Self {
        Self { mint: mint.into(), token_amount, from_user_account: None, to_user_account: None }
    }
}

/// Enhanced transaction as delivered by the indexer webhook.
/// Fields the pipeline does not read are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEvent {
    #[serde(default)]
    pub fee_payer: String,
    pub source: String,
    pub signature: String,
    pub timestamp: i64,
    pub token_transfers: Vec<TokenTransfer>,
}

/// Token amounts arrive as JSON numbers; the shortest decimal rendering of the
/// number is parsed so `0.1` stays `0.1` rather than its binary expansion.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => return Err(D::Error::custom(format!("expected a token amount, got {other}"))),
    };
    BigDecimal::from_str(text.trim()).map_err(D::Error::custom)
}
