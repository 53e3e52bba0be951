pub mod api;
pub mod config;
pub mod error;
pub mod gemini;

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini::GeminiClient;

/// Handler state. The client is built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self {
            gemini: Arc::new(gemini),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app).await
}
