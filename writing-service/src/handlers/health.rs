use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Static liveness message on the root route.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "AI Writing Assistant API is running!" }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "writing-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
