//! Seed Advisor - Backend Server

use seed_advisor::{create_app, db, AppState, CatalogueStore, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    seed_advisor::init_tracing("seed_advisor=debug,tower_http=debug,sqlx=warn");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Seed Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    let store = CatalogueStore::connect(&config).await?;

    // Run migrations in development
    if let CatalogueStore::Postgres(pool) = &store {
        if config.is_development() {
            tracing::info!("Running database migrations...");
            db::postgres::run_migrations(pool).await?;
            tracing::info!("Migrations completed");
        }
    }

    let listener = seed_advisor::bind(&config.server).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Build application
    let app = create_app(AppState::new(store.clone(), config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
