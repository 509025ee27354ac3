use crate::constants::HELIUS_MAINNET_RPC_URL;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use std::time::Duration;

/// Helius mainnet RPC url for `api_key`
pub fn helius_rpc_url(api_key: &str) -> String {
    format!("{HELIUS_MAINNET_RPC_URL}/?api-key={api_key}")
}

/// Make a nonblocking rpc client at `confirmed` commitment.
/// Every request is bounded by `timeout`.
pub fn make_rpc_client(rpc_url: &str, timeout: Duration) -> RpcClient {
    RpcClient::new_with_timeout_and_commitment(
        rpc_url.to_string(),
        timeout,
        CommitmentConfig::confirmed(),
    )
}
