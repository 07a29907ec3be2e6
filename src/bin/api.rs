use portfolio_advisor::{
    api::start_server, provider::StaticPortfolioProvider, registry::TemplateRegistry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Portfolio Advisor Engine - API Server");
    info!("Port: {}", api_port);

    // Create components
    let provider = Arc::new(StaticPortfolioProvider::sample());
    let registry = Arc::new(TemplateRegistry::new());

    info!("Engine initialized, starting API server...");

    start_server(provider, registry, api_port).await?;

    Ok(())
}
