/// The mint key of wrapped SOL, the reference leg of every watched pool
pub const WSOL_MINT_KEY_STR: &str = "So11111111111111111111111111111111111111112";
/// Minimum number of token transfers in a pool-creation event
pub const MIN_TOKEN_TRANSFERS: usize = 2;
/// Fraction digits kept on USD values
pub const USD_SCALE: i64 = 2;
/// Default minimum liquidity, in USD, that triggers an alert
pub const DEFAULT_MIN_USD_THRESHOLD: u32 = 1500;

/// Whether `mint` is the reference (wrapped SOL) mint
pub fn is_reference_mint(mint: &str) -> bool {
    mint == WSOL_MINT_KEY_STR
}
