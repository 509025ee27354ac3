use axum::response::Json;
use serde::Serialize;

/// Liveness report of the webhook relay
#[derive(Debug, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// `GET /health`: the relay is accepting webhook calls. Downstream services
/// are not probed, they are only reached while an event is processed.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
