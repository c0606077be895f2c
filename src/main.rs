//! aw3-mock-api server entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aw3_mock_api::api;
use aw3_mock_api::app_state::AppState;
use aw3_mock_api::config::MockConfig;
use aw3_mock_api::domain::FixtureStore;
use aw3_mock_api::service::MarketplaceService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MockConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        seeded = config.seed.is_some(),
        "starting aw3-mock-api"
    );

    let fixtures = Arc::new(FixtureStore::new());
    let service = MarketplaceService::new(fixtures, config.seed);
    let app = api::build_app(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
