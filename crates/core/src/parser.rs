use crate::{
    constants::MIN_TOKEN_TRANSFERS, errors::PipelineError, models::event::TransactionEvent,
};
use bigdecimal::{BigDecimal, Zero};
use serde_json::Value;
use tracing::warn;

/// Validate a raw webhook body and extract its transaction event.
///
/// The indexer posts a JSON array of events. Only the first one is processed;
/// any others are logged and dropped.
pub fn parse_event(body: &[u8]) -> Result<TransactionEvent, PipelineError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| PipelineError::malformed(format!("body is not valid JSON: {e}")))?;

    let Value::Array(mut events) = payload else {
        return Err(PipelineError::malformed("expected a JSON array of events"));
    };
    if events.is_empty() {
        return Err(PipelineError::malformed("event array is empty"));
    }
    if events.len() > 1 {
        warn!(dropped = events.len() - 1, "Batch contains more than one event, only the first is processed");
    }
    let first = events.swap_remove(0);

    let transfers = first
        .get("tokenTransfers")
        .ok_or_else(|| PipelineError::malformed("event has no tokenTransfers"))?
        .as_array()
        .ok_or_else(|| PipelineError::malformed("tokenTransfers is not an array"))?;
    if transfers.len() < MIN_TOKEN_TRANSFERS {
        return Err(PipelineError::malformed(format!(
            "expected at least {MIN_TOKEN_TRANSFERS} token transfers, got {}",
            transfers.len()
        )));
    }

    let event: TransactionEvent = serde_json::from_value(first)
        .map_err(|e| PipelineError::malformed(format!("invalid transaction event: {e}")))?;

    if let Some(transfer) = event.token_transfers.iter().find(|t| t.token_amount < BigDecimal::zero())
    {
        return Err(PipelineError::malformed(format!(
            "negative token amount {} for mint {}",
            transfer.token_amount, transfer.mint
        )));
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WSOL_MINT_KEY_STR;
    use serde_json::json;

    fn event_json(transfers: Value) -> Value {
        json!({
            "description": "",
            "feePayer": "FeePayer1111111111111111111111111111111111",
            "source": "RAYDIUM",
            "signature": "5h6xBEauJ3PK6SWCZ1PGjBvj8vDdWG3KpwATGy1ARAXFSDwt8GFXM7W5Ncn16wmqokgpiKRLuS83KUxyZyv2sUYv",
            "timestamp": 1704067200,
            "type": "CREATE_POOL",
            "tokenTransfers": transfers
        })
    }

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_parse_pool_creation() {
        let payload = json!([event_json(json!([
            { "mint": WSOL_MINT_KEY_STR, "tokenAmount": 20 },
            { "mint": "TKN123", "tokenAmount": 5000 }
        ]))]);
        let event = parse_event(&body(payload)).expect("failed to parse event");

        assert_eq!(event.source, "RAYDIUM");
        assert_eq!(event.timestamp, 1704067200);
        assert_eq!(event.token_transfers.len(), 2);
        assert_eq!(event.token_transfers[1].mint, "TKN123");
    }

    #[test]
    fn test_only_first_event_is_used() {
        let mut second = event_json(json!([]));
        second["source"] = json!("ORCA");
        let payload = json!([
            event_json(json!([
                { "mint": WSOL_MINT_KEY_STR, "tokenAmount": 1 },
                { "mint": "TKN123", "tokenAmount": 2 }
            ])),
            second
        ]);
        let event = parse_event(&body(payload)).expect("failed to parse event");
        assert_eq!(event.source, "RAYDIUM");
    }

    #[test]
    fn test_rejects_empty_array() {
        let err = parse_event(b"[]").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedPayload(_)));
    }

    #[test]
    fn test_rejects_non_array_and_invalid_json() {
        let err = parse_event(&body(event_json(json!([])))).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedPayload(_)));

        let err = parse_event(b"not json").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedPayload(_)));
    }

    #[test]
    fn test_rejects_missing_or_short_transfers() {
        let mut event = event_json(json!([]));
        event.as_object_mut().unwrap().remove("tokenTransfers");
        let err = parse_event(&body(json!([event]))).unwrap_err();
        assert!(err.to_string().contains("tokenTransfers"));

        let payload = json!([event_json(json!([{ "mint": "TKN123", "tokenAmount": 5 }]))]);
        let err = parse_event(&body(payload)).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let payload = json!([event_json(json!([
            { "mint": WSOL_MINT_KEY_STR, "tokenAmount": -20 },
            { "mint": "TKN123", "tokenAmount": 5000 }
        ]))]);
        let err = parse_event(&body(payload)).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_rejects_missing_signature() {
        let mut event = event_json(json!([
            { "mint": WSOL_MINT_KEY_STR, "tokenAmount": 20 },
            { "mint": "TKN123", "tokenAmount": 5000 }
        ]));
        event.as_object_mut().unwrap().remove("signature");
        let err = parse_event(&body(json!([event]))).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedPayload(_)));
    }
}
