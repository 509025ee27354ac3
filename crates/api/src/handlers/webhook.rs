use crate::{errors::ApiResult, state::AppState};
use axum::{body::Bytes, extract::State, response::Json};
use bigdecimal::BigDecimal;
use lpwatch_core::PipelineOutcome;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    Dispatched,
    BelowThreshold,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub status: WebhookStatus,
    pub signature: String,
    pub mint: String,
    pub usd_value: String,
    pub threshold: Option<String>,
}

fn usd(value: &BigDecimal) -> String {
    value.with_scale(2).to_string()
}

impl From<PipelineOutcome> for WebhookResponse {
    fn from(outcome: PipelineOutcome) -> Self {
        match outcome {
            PipelineOutcome::Dispatched { signature, mint, usd_value } => WebhookResponse {
                status: WebhookStatus::Dispatched,
                signature,
                mint,
                usd_value: usd(&usd_value),
                threshold: None,
            },
            PipelineOutcome::BelowThreshold { signature, mint, usd_value, threshold } => {
                WebhookResponse {
                    status: WebhookStatus::BelowThreshold,
                    signature,
                    mint,
                    usd_value: usd(&usd_value),
                    threshold: Some(usd(&threshold)),
                }
            }
        }
    }
}

/// Receives an enhanced-transaction webhook call and runs it through the pipeline.
///
/// The body is taken raw so malformed payloads surface as pipeline errors
/// instead of extractor rejections.
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<WebhookResponse>> {
    match state.pipeline.process(&body).await {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(err) => {
            if err.is_payload_error() {
                warn!(%err, body_len = body.len(), "Rejected webhook payload");
            } else {
                error!(%err, "Webhook processing failed");
            }
            Err(err.into())
        }
    }
}
