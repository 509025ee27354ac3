//! this file resolves descriptive token metadata from the Metaplex metadata account
//! and the JSON document it links to.
use crate::offchain::OffChainMetadata;
use async_trait::async_trait;
use lpwatch_core::{MetadataError, MetadataSource, TokenExtensions, TokenMetadata};
use mpl_token_metadata::accounts::Metadata;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;
use std::{str::FromStr, sync::Arc};
use tracing::{debug, instrument, warn};

/// Cleans a metadata string by removing null terminators
pub fn clean_string(s: &str) -> String {
    s.trim_matches(char::from(0)).trim().to_string()
}

/// Treat blank strings as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// The fields of the Metaplex metadata account the alert needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnChainMetadata {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl From<Metadata> for OnChainMetadata {
    fn from(metadata: Metadata) -> Self {
        Self {
            mint: metadata.mint.to_string(),
            name: clean_string(&metadata.name),
            symbol: clean_string(&metadata.symbol),
            uri: clean_string(&metadata.uri),
        }
    }
}

/// Combine on-chain and off-chain metadata into what the alert shows.
///
/// The off-chain symbol wins when present; blank strings count as missing.
pub fn merge_metadata(onchain: &OnChainMetadata, offchain: Option<OffChainMetadata>) -> TokenMetadata {
    let Some(offchain) = offchain else {
        return TokenMetadata { symbol: onchain.symbol.clone(), ..Default::default() };
    };

    let links = offchain.links();
    let extensions = TokenExtensions {
        website: non_blank(links.website),
        twitter: non_blank(links.twitter),
        telegram: non_blank(links.telegram),
    };

    TokenMetadata {
        symbol: non_blank(offchain.symbol).unwrap_or_else(|| onchain.symbol.clone()),
        description: non_blank(offchain.description),
        image: non_blank(offchain.image),
        extensions: (!extensions.is_empty()).then_some(extensions),
    }
}

/// Resolves metadata over the chain rpc connection, then over http for the json document
#[derive(Clone)]
pub struct MetaplexMetadataSource {
    rpc_client: Arc<RpcClient>,
    http_client: reqwest::Client,
}

impl MetaplexMetadataSource {
    pub fn new(rpc_client: Arc<RpcClient>, http_client: reqwest::Client) -> Self {
        Self { rpc_client, http_client }
    }

    #[instrument(skip(self))]
    pub async fn get_mpl_token_metadata(&self, mint: &str) -> Result<OnChainMetadata, MetadataError> {
        let pubkey = Pubkey::from_str(mint).map_err(|e| {
            warn!(mint, error = %e, "Traded mint is not a valid address");
            MetadataError::NotFound(mint.to_string())
        })?;

        // Find metadata PDA
        let (metadata_pubkey, _) = Metadata::find_pda(&pubkey);
        debug!(mint, metadata_pubkey = %metadata_pubkey, "Fetching MPL metadata");

        let account = self
            .rpc_client
            .get_account_with_commitment(&metadata_pubkey, self.rpc_client.commitment())
            .await
            .map_err(|e| {
                MetadataError::Service(format!("failed to get metadata account for {mint}: {e}"))
            })?
            .value
            .ok_or_else(|| MetadataError::NotFound(mint.to_string()))?;

        let metadata = Metadata::from_bytes(&account.data).map_err(|e| {
            MetadataError::Service(format!("failed to decode metadata account for {mint}: {e}"))
        })?;
        Ok(metadata.into())
    }

    #[instrument(skip(self))]
    pub async fn get_offchain_metadata(&self, uri: &str) -> Result<OffChainMetadata, MetadataError> {
        let response = self
            .http_client
            .get(uri)
            .send()
            .await
            .map_err(|e| MetadataError::Service(format!("failed to fetch {uri}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Service(format!("{uri} responded with status {status}")));
        }

        response
            .json::<OffChainMetadata>()
            .await
            .map_err(|e| MetadataError::Service(format!("invalid metadata json at {uri}: {e}")))
    }
}

#[async_trait]
impl MetadataSource for MetaplexMetadataSource {
    async fn token_metadata(&self, mint: &str) -> Result<TokenMetadata, MetadataError> {
        let onchain = self.get_mpl_token_metadata(mint).await?;
        let offchain = if onchain.uri.is_empty() {
            debug!(mint, "Metadata account has no uri, using on-chain fields only");
            None
        } else {
            Some(self.get_offchain_metadata(&onchain.uri).await?)
        };
        Ok(merge_metadata(&onchain, offchain))
    }
}
