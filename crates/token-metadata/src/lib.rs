pub mod client;
pub mod constants;
pub mod metadata;
pub mod offchain;

/// Re-export the crate functions
pub use crate::{
    client::{helius_rpc_url, make_rpc_client},
    metadata::{merge_metadata, MetaplexMetadataSource, OnChainMetadata},
    offchain::OffChainMetadata,
};
