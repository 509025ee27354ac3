use axum::http::StatusCode;
use lpwatch_core::PipelineError;
use serde_json::json;
use std::fmt::{Debug, Display};
use tracing_error::SpanTrace;

pub type ApiResult<T> = Result<T, ApiError>;

// https://docs.rs/tracing-error/latest/tracing_error/
#[derive(Debug, thiserror::Error)]
pub enum ApiErrorKind {
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("{1}")]
    Custom(StatusCode, String),
}

impl ApiErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiErrorKind::Pipeline(err) => match err {
                PipelineError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
                PipelineError::AmbiguousMint(_)
                | PipelineError::ReferenceTransferNotFound
                | PipelineError::MetadataNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
                PipelineError::PriceFetch(_)
                | PipelineError::MetadataService(_)
                | PipelineError::Dispatch(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiErrorKind::Custom(code, _) => *code,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub error_kind: ApiErrorKind,
    pub inner: anyhow::Error,
    pub context: SpanTrace,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: ", &self.error_kind)?;
        // anyhow chain, plus a backtrace when RUST_BACKTRACE=1
        writeln!(f, "{:?}", self.inner)?;
        std::fmt::Display::fmt(&self.context, f)
    }
}

impl<T> From<T> for ApiError
where
    T: Into<ApiErrorKind>,
{
    fn from(t: T) -> Self {
        let into = t.into();
        ApiError {
            inner: anyhow::anyhow!("{:?}", &into),
            error_kind: into,
            context: SpanTrace::capture(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.error_kind.status_code();
        let body = axum::Json(json!({
            "success": false,
            "code": status_code.as_u16(),
            "error": status_code.canonical_reason().unwrap_or("Unknown").to_string(),
            "message": self.error_kind.to_string(),
        }));
        (status_code, body).into_response()
    }
}
