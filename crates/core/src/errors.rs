use crate::constants::WSOL_MINT_KEY_STR;

/// Why the traded leg of an event could not be identified
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MintAmbiguity {
    #[error("no transfer carries the reference mint {}", WSOL_MINT_KEY_STR)]
    NoReferenceLeg,

    #[error("every transfer carries the reference mint")]
    NoTradedLeg,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PriceError {
    #[error("price request failed: {0}")]
    Transport(String),

    #[error("price oracle responded with status {0}")]
    Status(u16),

    #[error("price oracle returned no usable value: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MetadataError {
    #[error("no metadata registered for mint {0}")]
    NotFound(String),

    #[error("metadata service error: {0}")]
    Service(String),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    #[error("failed to serialize alert: {0}")]
    Serialize(String),

    #[error("webhook request failed: {0}")]
    Transport(String),

    #[error("webhook responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Every way a single webhook call can fail. None of these outlive the request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("ambiguous mint: {0}")]
    AmbiguousMint(#[from] MintAmbiguity),

    #[error("no reference transfer ({}) in event", WSOL_MINT_KEY_STR)]
    ReferenceTransferNotFound,

    #[error("price fetch failed: {0}")]
    PriceFetch(#[from] PriceError),

    #[error("metadata not found for mint {0}")]
    MetadataNotFound(String),

    #[error("metadata service failed: {0}")]
    MetadataService(String),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

impl From<MetadataError> for PipelineError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::NotFound(mint) => PipelineError::MetadataNotFound(mint),
            MetadataError::Service(reason) => PipelineError::MetadataService(reason),
        }
    }
}

impl PipelineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PipelineError::MalformedPayload(reason.into())
    }

    /// Whether the failure was caused by the inbound payload rather than a downstream service
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            PipelineError::MalformedPayload(_)
                | PipelineError::AmbiguousMint(_)
                | PipelineError::ReferenceTransferNotFound
        )
    }
}
