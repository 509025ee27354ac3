use crate::{
    composer::compose_message,
    constants::DEFAULT_MIN_USD_THRESHOLD,
    errors::PipelineError,
    gate::ThresholdGate,
    models::{alert::LiquidityAlert, event::TransactionEvent},
    parser::parse_event,
    resolver::resolve_traded_mint,
    stages::{AlertSink, MetadataSource, PriceOracle},
    timestamp::format_timestamp,
    valuation::{compute_usd_value, resolve_reference_amount, ValuationMode},
};
use bigdecimal::BigDecimal;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tunables of the decision logic
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_usd_threshold: BigDecimal,
    pub valuation_mode: ValuationMode,
    pub timezone: Tz,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_usd_threshold: BigDecimal::from(DEFAULT_MIN_USD_THRESHOLD),
            valuation_mode: ValuationMode::default(),
            timezone: chrono_tz::Asia::Manila,
        }
    }
}

/// How a successfully processed event ended
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Dispatched { signature: String, mint: String, usd_value: BigDecimal },
    BelowThreshold { signature: String, mint: String, usd_value: BigDecimal, threshold: BigDecimal },
}

/// Parse → resolve → value → gate → enrich → compose → dispatch.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct Pipeline {
    price_oracle: Arc<dyn PriceOracle>,
    metadata_source: Arc<dyn MetadataSource>,
    alert_sink: Arc<dyn AlertSink>,
    gate: ThresholdGate,
    valuation_mode: ValuationMode,
    timezone: Tz,
}

impl Pipeline {
    pub fn new(
        config: &PipelineConfig,
        price_oracle: Arc<dyn PriceOracle>,
        metadata_source: Arc<dyn MetadataSource>,
        alert_sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            price_oracle,
            metadata_source,
            alert_sink,
            gate: ThresholdGate::new(config.min_usd_threshold.clone()),
            valuation_mode: config.valuation_mode,
            timezone: config.timezone,
        }
    }

    /// Process a raw webhook body
    pub async fn process(&self, body: &[u8]) -> Result<PipelineOutcome, PipelineError> {
        let event = parse_event(body)?;
        self.process_event(&event).await
    }

    #[instrument(skip(self, event), fields(signature = %event.signature, source = %event.source))]
    pub async fn process_event(
        &self,
        event: &TransactionEvent,
    ) -> Result<PipelineOutcome, PipelineError> {
        let mint = resolve_traded_mint(&event.token_transfers)?;
        let amount = resolve_reference_amount(&event.token_transfers)?;

        let price = self.price_oracle.spot_price().await?;
        let usd_value = compute_usd_value(amount, &price, self.valuation_mode);
        debug!(mint, %amount, %price, %usd_value, mode = %self.valuation_mode, "Valued liquidity");

        if !self.gate.passes(&usd_value) {
            info!(mint, %usd_value, threshold = %self.gate.min_usd(), "Liquidity below threshold, no alert");
            return Ok(PipelineOutcome::BelowThreshold {
                signature: event.signature.clone(),
                mint: mint.to_string(),
                usd_value,
                threshold: self.gate.min_usd().clone(),
            });
        }

        let metadata = self.metadata_source.token_metadata(mint).await?;
        let alert = LiquidityAlert {
            source: event.source.clone(),
            signature: event.signature.clone(),
            timestamp: format_timestamp(event.timestamp, self.timezone),
            traded_mint: mint.to_string(),
            usd_value,
            metadata,
        };
        let message = compose_message(&alert);
        self.alert_sink.dispatch(&message).await?;
        info!(mint, symbol = %alert.metadata.symbol, usd_value = %alert.usd_value, "Liquidity alert dispatched");

        Ok(PipelineOutcome::Dispatched {
            signature: alert.signature,
            mint: alert.traded_mint,
            usd_value: alert.usd_value,
        })
    }
}
