//! Binary entry point: wires configuration, database, seed data, and the
//! HTTP server together.

use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use reseat::{api, config, errors::Result, seed};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load business settings (hourly rate, margin threshold, listen address)
    let settings = config::settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {e}"))?;

    // 4. Initialize the database
    let database_url = config::database::get_database_url();
    let db = config::database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Seed starter data (if the store is empty)
    seed::seed_starter_data(&db, &settings)
        .await
        .inspect_err(|e| error!("Failed to seed starter data: {e}"))?;

    // 6. Serve the API
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let state = api::AppState {
        db,
        settings: Arc::new(settings),
    };
    let app = api::router::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
