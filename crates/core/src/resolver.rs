use crate::{constants::is_reference_mint, errors::MintAmbiguity, models::event::TokenTransfer};

/// Find the mint of the traded (non-reference) leg.
///
/// Scans every transfer instead of trusting positions. Pool creations often
/// carry extra legs such as the LP token mint; the pair is the first two
/// transfers, so a non-reference mint there wins. Otherwise the first
/// non-reference mint in the event is used.
pub fn resolve_traded_mint(transfers: &[TokenTransfer]) -> Result<&str, MintAmbiguity> {
    if !transfers.iter().any(|t| is_reference_mint(&t.mint)) {
        return Err(MintAmbiguity::NoReferenceLeg);
    }

    let pair = &transfers[..transfers.len().min(2)];
    let traded = pair
        .iter()
        .chain(transfers.iter())
        .find(|t| !is_reference_mint(&t.mint))
        .ok_or(MintAmbiguity::NoTradedLeg)?;
    Ok(&traded.mint)
}
