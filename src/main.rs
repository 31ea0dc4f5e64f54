//! Code Camp API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use code_camp_api::domain::gateways::CampRepository;
use code_camp_api::infrastructure::driven_adapters::config::{AppConfig, StorageBackend};
use code_camp_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use code_camp_api::infrastructure::driven_adapters::{InMemoryCampRepository, PostgresCampRepository};
use code_camp_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "code_camp_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(backend = ?config.storage.backend, "Configuration loaded successfully");

    // Create repository
    let camp_repository: Arc<dyn CampRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");

            run_migrations(&pool).await?;
            tracing::info!("Database migrations completed");

            Arc::new(PostgresCampRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage with sample data");
            Arc::new(InMemoryCampRepository::seeded())
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Build router
    let app = build_router(AppState::new(config, camp_repository));

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
