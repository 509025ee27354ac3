use crate::errors::{ApiError, ApiErrorKind};
use axum::http::{header::ALLOW, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub mod health;
pub mod webhook;

/// Fallback for routes that do not exist
pub async fn not_found() -> ApiError {
    ApiErrorKind::Custom(StatusCode::NOT_FOUND, "route not found".to_string()).into()
}

/// Fallback for `/` when called with anything but POST
pub async fn method_not_allowed() -> Response {
    let err: ApiError =
        ApiErrorKind::Custom(StatusCode::METHOD_NOT_ALLOWED, "only POST is accepted".to_string())
            .into();
    let mut response = err.into_response();
    response.headers_mut().insert(ALLOW, HeaderValue::from_static("POST"));
    response
}
