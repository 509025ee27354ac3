/// Helius mainnet RPC endpoint; the API key goes in the `api-key` query parameter
pub const HELIUS_MAINNET_RPC_URL: &str = "https://mainnet.helius-rpc.com";
