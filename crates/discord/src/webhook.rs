use async_trait::async_trait;
use lpwatch_core::{AlertMessage, AlertSink, DispatchError};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};
use url::Url;

/// Characters of the response body kept in a dispatch error
const MAX_ERROR_BODY_LEN: usize = 512;

/// Posts alerts to a Discord channel webhook
#[derive(Clone)]
pub struct DiscordWebhook {
    client: reqwest::Client,
    webhook_url: Url,
}

impl std::fmt::Debug for DiscordWebhook {
    // the webhook url embeds its token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhook").field("host", &self.webhook_url.host_str()).finish()
    }
}

impl DiscordWebhook {
    pub fn new(client: reqwest::Client, webhook_url: Url) -> Self {
        Self { client, webhook_url }
    }
}

#[async_trait]
impl AlertSink for DiscordWebhook {
    #[instrument(skip_all, fields(content = %message.content))]
    async fn dispatch(&self, message: &AlertMessage) -> Result<(), DispatchError> {
        let body =
            serde_json::to_vec(message).map_err(|e| DispatchError::Serialize(e.to_string()))?;

        let response = self
            .client
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: String =
                response.text().await.unwrap_or_default().chars().take(MAX_ERROR_BODY_LEN).collect();
            return Err(DispatchError::Status { status: status.as_u16(), body });
        }
        debug!(status = status.as_u16(), "Alert delivered");
        Ok(())
    }
}

/// Prints alerts as JSON instead of delivering them
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

#[async_trait]
impl AlertSink for StdoutSink {
    async fn dispatch(&self, message: &AlertMessage) -> Result<(), DispatchError> {
        let json = serde_json::to_string_pretty(message)
            .map_err(|e| DispatchError::Serialize(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use lpwatch_core::{Embed, EmbedField};
    use serde_json::{json, Value};
    use std::{sync::Arc, time::Duration};
    use tokio::{net::TcpListener, sync::Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn serve(router: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server failed");
        });
        Url::parse(&format!("http://{addr}/api/webhooks/1/token")).expect("invalid mock url")
    }

    fn message() -> AlertMessage {
        AlertMessage {
            content: "New RAYDIUM LP".to_string(),
            embeds: vec![Embed {
                title: "TKN".to_string(),
                description: None,
                fields: vec![EmbedField::new("Token address", "TKN123", false)],
                image: None,
                footer: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_dispatch_posts_json() {
        async fn receive(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
            received.lock().await.push(body);
            StatusCode::NO_CONTENT
        }
        let received: Received = Arc::default();
        let router = Router::new()
            .route("/api/webhooks/1/token", post(receive))
            .with_state(received.clone());
        let webhook = DiscordWebhook::new(reqwest::Client::new(), serve(router).await);

        webhook.dispatch(&message()).await.expect("dispatch failed");

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["content"], json!("New RAYDIUM LP"));
        assert_eq!(received[0]["embeds"][0]["fields"][0]["value"], json!("TKN123"));
        assert!(received[0]["embeds"][0].get("image").is_none());
    }

    #[tokio::test]
    async fn test_dispatch_reports_rejection() {
        let router = Router::new().route(
            "/api/webhooks/1/token",
            post(|| async { (StatusCode::BAD_REQUEST, "{\"embeds\": [\"0\"]}") }),
        );
        let webhook = DiscordWebhook::new(reqwest::Client::new(), serve(router).await);

        let err = webhook.dispatch(&message()).await.unwrap_err();
        match err {
            DispatchError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("embeds"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}/hook", listener.local_addr().unwrap())).unwrap();
        drop(listener);
        let webhook = DiscordWebhook::new(reqwest::Client::new(), url);

        assert!(matches!(webhook.dispatch(&message()).await, Err(DispatchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_dispatch_times_out() {
        let router = Router::new().route(
            "/api/webhooks/1/token",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::NO_CONTENT
            }),
        );
        let client = reqwest::Client::builder().timeout(Duration::from_millis(200)).build().unwrap();
        let webhook = DiscordWebhook::new(client, serve(router).await);

        assert!(matches!(webhook.dispatch(&message()).await, Err(DispatchError::Transport(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let url = Url::parse("https://discord.com/api/webhooks/1/secret-token").unwrap();
        let webhook = DiscordWebhook::new(reqwest::Client::new(), url);
        assert!(!format!("{webhook:?}").contains("secret-token"));
    }
}
