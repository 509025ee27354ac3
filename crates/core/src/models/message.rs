//! Discord webhook payload.
//!
//! <https://discord.com/developers/docs/resources/webhook#execute-webhook>
use serde::Serialize;
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub image: Option<EmbedImage>,
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self { name: name.into(), value: value.into(), inline }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}
