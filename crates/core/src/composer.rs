use crate::models::{
    alert::LiquidityAlert,
    message::{AlertMessage, Embed, EmbedField, EmbedFooter, EmbedImage},
};

const BIRDEYE_TOKEN_URL: &str = "https://birdeye.so/token";
const SOLSCAN_TX_URL: &str = "https://solscan.io/tx";

fn markdown_link(label: &str, url: &str) -> String {
    format!("[{label}]({url})")
}

/// Build the Discord payload for an alert.
///
/// Fixed fields come first (address, Birdeye, Solscan, liquidity), followed by
/// whichever social links the token publishes.
pub fn compose_message(alert: &LiquidityAlert) -> AlertMessage {
    let mint = &alert.traded_mint;
    let metadata = &alert.metadata;

    let mut fields = vec![
        EmbedField::new("Token address", mint.as_str(), false),
        EmbedField::new(
            "Birdeye",
            markdown_link("Birdeye", &format!("{BIRDEYE_TOKEN_URL}/{mint}?chain=solana")),
            true,
        ),
        EmbedField::new(
            "Solscan",
            markdown_link("Solscan", &format!("{SOLSCAN_TX_URL}/{}", alert.signature)),
            true,
        ),
        EmbedField::new("SOL LP", format!("${}", alert.usd_value), true),
    ];
    if let Some(extensions) = &metadata.extensions {
        fields.extend(
            extensions.links().map(|(label, url)| EmbedField::new(label, markdown_link(label, url), true)),
        );
    }

    AlertMessage {
        content: format!("New {} LP", alert.source),
        embeds: vec![Embed {
            title: metadata.symbol.clone(),
            description: metadata.description.clone(),
            fields,
            image: metadata.image.clone().map(|url| EmbedImage { url }),
            footer: Some(EmbedFooter { text: alert.timestamp.clone() }),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metadata::{TokenExtensions, TokenMetadata};
    use bigdecimal::BigDecimal;
    use serde_json::json;
    use std::str::FromStr;

    fn alert(extensions: Option<TokenExtensions>) -> LiquidityAlert {
        LiquidityAlert {
            source: "RAYDIUM".to_string(),
            signature: "SIG111".to_string(),
            timestamp: "1/1/2024, 8:00:00 AM".to_string(),
            traded_mint: "TKN123".to_string(),
            usd_value: BigDecimal::from_str("1500.00").unwrap(),
            metadata: TokenMetadata {
                symbol: "TKN".to_string(),
                description: Some("A token".to_string()),
                image: Some("https://img.io/tkn.png".to_string()),
                extensions,
            },
        }
    }

    fn field_names(message: &AlertMessage) -> Vec<&str> {
        message.embeds[0].fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_full_payload_shape() {
        let message = compose_message(&alert(Some(TokenExtensions {
            website: Some("https://x.io".to_string()),
            twitter: Some("https://x.com/tkn".to_string()),
            telegram: Some("https://t.me/tkn".to_string()),
        })));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "content": "New RAYDIUM LP",
                "embeds": [{
                    "title": "TKN",
                    "description": "A token",
                    "fields": [
                        { "name": "Token address", "value": "TKN123", "inline": false },
                        { "name": "Birdeye", "value": "[Birdeye](https://birdeye.so/token/TKN123?chain=solana)", "inline": true },
                        { "name": "Solscan", "value": "[Solscan](https://solscan.io/tx/SIG111)", "inline": true },
                        { "name": "SOL LP", "value": "$1500.00", "inline": true },
                        { "name": "Website", "value": "[Website](https://x.io)", "inline": true },
                        { "name": "Twitter", "value": "[Twitter](https://x.com/tkn)", "inline": true },
                        { "name": "Telegram", "value": "[Telegram](https://t.me/tkn)", "inline": true }
                    ],
                    "image": { "url": "https://img.io/tkn.png" },
                    "footer": { "text": "1/1/2024, 8:00:00 AM" }
                }]
            })
        );
    }

    #[test]
    fn test_only_website_extension() {
        let message = compose_message(&alert(Some(TokenExtensions {
            website: Some("https://x.io".to_string()),
            ..Default::default()
        })));
        assert_eq!(
            field_names(&message),
            vec!["Token address", "Birdeye", "Solscan", "SOL LP", "Website"]
        );
    }

    #[test]
    fn test_no_extensions() {
        let message = compose_message(&alert(None));
        assert_eq!(field_names(&message), vec!["Token address", "Birdeye", "Solscan", "SOL LP"]);

        let message = compose_message(&alert(Some(TokenExtensions::default())));
        assert_eq!(message.embeds[0].fields.len(), 4);
    }

    #[test]
    fn test_missing_description_and_image_are_omitted() {
        let mut alert = alert(None);
        alert.metadata.description = None;
        alert.metadata.image = None;
        let value = serde_json::to_value(compose_message(&alert)).unwrap();
        let embed = value["embeds"][0].as_object().unwrap();
        assert!(!embed.contains_key("description"));
        assert!(!embed.contains_key("image"));
    }

    #[test]
    fn test_composition_is_idempotent() {
        let alert = alert(Some(TokenExtensions {
            twitter: Some("https://x.com/tkn".to_string()),
            ..Default::default()
        }));
        let first = serde_json::to_vec(&compose_message(&alert)).unwrap();
        let second = serde_json::to_vec(&compose_message(&alert)).unwrap();
        assert_eq!(first, second);
    }
}
