pub mod composer;
pub mod constants;
pub mod errors;
pub mod gate;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod stages;
pub mod timestamp;
pub mod valuation;

/// Re-export the crate functions
pub use crate::{
    composer::compose_message,
    constants::WSOL_MINT_KEY_STR,
    errors::{DispatchError, MetadataError, MintAmbiguity, PipelineError, PriceError},
    gate::ThresholdGate,
    models::{
        alert::LiquidityAlert,
        event::{TokenTransfer, TransactionEvent},
        message::{AlertMessage, Embed, EmbedField, EmbedFooter, EmbedImage},
        metadata::{TokenExtensions, TokenMetadata},
    },
    parser::parse_event,
    pipeline::{Pipeline, PipelineConfig, PipelineOutcome},
    resolver::resolve_traded_mint,
    stages::{AlertSink, MetadataSource, PriceOracle},
    timestamp::format_timestamp,
    valuation::{compute_usd_value, resolve_reference_amount, round_usd, ValuationMode},
};
