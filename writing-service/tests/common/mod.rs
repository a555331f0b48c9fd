#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;
use writing_service::config::{AnthropicSettings, CorsConfig, WritingConfig, DEFAULT_MODEL};
use writing_service::services::providers::mock::MockTextProvider;
use writing_service::startup::{build_router, AppState, Application};

pub fn test_config() -> WritingConfig {
    WritingConfig {
        common: CoreConfig { port: 0 },
        anthropic: AnthropicSettings {
            api_key: Secret::new("test-api-key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        },
        cors: CorsConfig::default(),
    }
}

/// Router wired to `provider`, for in-process `oneshot` requests.
pub fn test_router(provider: Arc<MockTextProvider>) -> Router {
    build_router(AppState {
        config: test_config(),
        text_provider: provider,
    })
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a fresh router and return status plus JSON body.
pub async fn send(
    provider: Arc<MockTextProvider>,
    request: Request<Body>,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = test_router(provider).oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    /// Spawn the full server on a random port.
    pub async fn spawn(provider: Arc<MockTextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            provider,
        }
    }
}
