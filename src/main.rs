use anyhow::Context;
use gemini_ask_service::{
    build_app, config::AppConfig, gemini::GeminiClient, init_tracing, run_server, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing();

    let state = AppState::new(GeminiClient::new(config.gemini()));
    let app = build_app(state);

    run_server(app, config.port)
        .await
        .with_context(|| format!("server on port {} failed", config.port))
}
