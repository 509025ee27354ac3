use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Social links published alongside a token's metadata
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExtensions {
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
}

impl TokenExtensions {
    /// Present links as `(label, url)` pairs, in alert order
    pub fn links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("Website", &self.website), ("Twitter", &self.twitter), ("Telegram", &self.telegram)]
            .into_iter()
            .filter_map(|(label, url)| url.as_deref().map(|url| (label, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.links().next().is_none()
    }
}

/// Descriptive metadata of the traded token
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub symbol: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub extensions: Option<TokenExtensions>,
}
