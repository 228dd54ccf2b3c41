//! Standalone webhook test endpoint, unrelated to the bot runtime.
//!
//! Spins up a minimal HTTP server that logs whatever JSON lands on
//! `POST /webhook`, for poking at webhook integrations locally:
//!
//! ```text
//! cargo run --features webhook --bin webhook-test
//! curl -X POST localhost:8080/webhook -d '{"ping": true}' -H 'content-type: application/json'
//! ```

use axum::{
    Json, Router,
    routing::{get, post},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn healthz() -> &'static str {
    "ok"
}

async fn receive_webhook(Json(payload): Json<serde_json::Value>) -> &'static str {
    info!("Received webhook payload: {payload}");
    "received"
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/webhook", post(receive_webhook));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    info!("Webhook test endpoint listening on http://127.0.0.1:8080");
    axum::serve(listener, app).await
}
