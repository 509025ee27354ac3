//! Off-chain token metadata: the JSON document an on-chain `uri` points at.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OffChainExtensions {
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
}

/// Metaplex-style token JSON.
///
/// Some launchpads publish social links at the top level instead of under
/// `extensions`; both places are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OffChainMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub extensions: Option<OffChainExtensions>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl OffChainMetadata {
    /// Social links, preferring `extensions` over top-level fields.
    /// A blank nested link does not hide the top-level one.
    pub fn links(&self) -> OffChainExtensions {
        let nested = self.extensions.clone().unwrap_or_default();
        OffChainExtensions {
            website: filled(nested.website).or_else(|| filled(self.website.clone())),
            twitter: filled(nested.twitter).or_else(|| filled(self.twitter.clone())),
            telegram: filled(nested.telegram).or_else(|| filled(self.telegram.clone())),
        }
    }
}
