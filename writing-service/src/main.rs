use service_core::observability::init_tracing;
use writing_service::config::WritingConfig;
use writing_service::services::init_metrics;
use writing_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("writing-service", "info", otlp_endpoint.as_deref());

    init_metrics()?;

    let config = WritingConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
