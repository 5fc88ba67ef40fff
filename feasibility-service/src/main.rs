use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feasibility_service::infrastructure::{config::Settings, ReqwestOptimizerClient};
use feasibility_service::api;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feasibility_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Feasibility Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let optimizer = ReqwestOptimizerClient::new(
        settings.optimizer.base_url.clone(),
        Duration::from_secs(settings.optimizer.timeout_secs),
    );

    let state = api::AppState::new(settings.engine_defaults.clone(), Arc::new(optimizer));

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Feasibility Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
