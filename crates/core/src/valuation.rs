use crate::{
    constants::{is_reference_mint, USD_SCALE},
    errors::PipelineError,
    models::event::TokenTransfer,
};
use bigdecimal::{BigDecimal, RoundingMode};
use strum_macros::{Display, EnumString};

/// How the reference amount and spot price are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValuationMode {
    /// Drop the fractional part of both operands before multiplying.
    /// Keeps thresholds comparable with alerts produced historically.
    #[default]
    Truncate,
    /// Full precision decimal product
    Exact,
}

/// Amount of wrapped SOL moved by the event.
/// When the reference mint appears on several transfers the last one wins.
pub fn resolve_reference_amount(transfers: &[TokenTransfer]) -> Result<&BigDecimal, PipelineError> {
    transfers
        .iter()
        .rev()
        .find(|transfer| is_reference_mint(&transfer.mint))
        .map(|transfer| &transfer.token_amount)
        .ok_or(PipelineError::ReferenceTransferNotFound)
}

/// Round a USD amount to cents, half up
pub fn round_usd(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(USD_SCALE, RoundingMode::HalfUp)
}

/// USD value of the liquidity added, rounded to cents
pub fn compute_usd_value(amount: &BigDecimal, price: &BigDecimal, mode: ValuationMode) -> BigDecimal {
    let product = match mode {
        ValuationMode::Truncate => {
            amount.with_scale_round(0, RoundingMode::Floor)
                * price.with_scale_round(0, RoundingMode::Floor)
        }
        ValuationMode::Exact => amount * price,
    };
    round_usd(&product)
}
