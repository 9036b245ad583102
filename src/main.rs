//! Server: waits for the database, ensures the characters table, serves the API.

use character_catalog::{app, ensure_catalog_tables, wait_for_database, AppConfig, AppState, PgCharacterRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("character_catalog=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = wait_for_database(&config.database_url, config.max_connections, config.retry_delay).await?;
    ensure_catalog_tables(&pool).await?;

    let state = AppState::new(Arc::new(PgCharacterRepository::new(pool)));
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
