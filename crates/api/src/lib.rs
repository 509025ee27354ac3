use crate::{handlers::webhook::receive_webhook, shutdown::shutdown_signal_with_handler};

use axum::{
    routing::{get, post},
    Router,
};
use axum_otel::{AxumOtelSpanCreator, Level};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod errors;
mod handlers;
mod shutdown;
pub mod state;

pub use config::{Delivery, Settings};
pub use handlers::webhook::{WebhookResponse, WebhookStatus};
pub use state::AppState;

/// Build the router serving the webhook and health endpoints
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", post(receive_webhook).fallback(handlers::method_not_allowed))
        .route("/health", get(handlers::health::get_health))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(AxumOtelSpanCreator::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

/// Initialize the API server and serve until a shutdown signal arrives
pub async fn init_api(settings: &Settings) -> anyhow::Result<()> {
    let pipeline = settings.build_pipeline(Delivery::Discord)?;
    let app = app(AppState::new(pipeline));

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    info!(
        threshold = %settings.min_usd_threshold,
        mode = %settings.valuation_mode,
        "Starting Server on addrs {:?}",
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal_with_handler(|| async move {
            info!("Received shutdown signal at {:?}", chrono::Utc::now());
        }))
        .await?;
    info!("Server shutdown at {:?}", chrono::Utc::now());
    Ok(())
}
