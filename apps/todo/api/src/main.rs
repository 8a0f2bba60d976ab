use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config_with_retry, run_migrations};
use domain_todos::{InMemoryTodoRepository, SqlTodoRepository, TodoService};
use eyre::WrapErr;
use migration::Migrator;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;

use config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(storage = %config.storage, "Starting {} v{}", config.app.name, config.app.version);

    let (api_routes, db) = match config.storage {
        StorageBackend::Sql => {
            let db = connect_from_config_with_retry(config.database.clone(), None)
                .await
                .wrap_err("SQL connection failed")?;
            run_migrations::<Migrator>(&db, config.app.name)
                .await
                .wrap_err("Schema migration failed")?;

            let service = TodoService::new(SqlTodoRepository::new(db.clone()));
            (api::routes(service), Some(db))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; todos are lost on exit");
            let service = TodoService::new(InMemoryTodoRepository::new());
            (api::routes(service), None)
        }
    };

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.server)?;

    // Health endpoints bypass the API middleware
    // - /health: liveness with app name/version
    // - /ready: readiness, pings the SQL store when configured
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    create_production_app(app, &config.server, async move {
        let Some(db) = db else {
            return;
        };

        info!("Shutting down: closing database connection");
        match db.close().await {
            Ok(_) => info!("Database connection closed successfully"),
            Err(e) => tracing::error!("Error closing database: {}", e),
        }
    })
    .await
    .wrap_err("Server error")?;

    info!("Todo API shutdown complete");
    Ok(())
}
