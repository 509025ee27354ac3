/// Public Birdeye API host
pub const DEFAULT_BIRDEYE_API_URL: &str = "https://public-api.birdeye.so";
/// Path of the single-token price endpoint
pub const BIRDEYE_PRICE_PATH: &str = "public/price";
/// Header carrying the Birdeye API key
pub const BIRDEYE_API_KEY_HEADER: &str = "X-API-KEY";
