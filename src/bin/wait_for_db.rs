//! Block until the configured database accepts connections, then exit 0.
//! Intended for container entrypoints: `wait-for-db && character-catalog`.

use character_catalog::{wait_for_database, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("character_catalog=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = wait_for_database(&config.database_url, 1, config.retry_delay).await?;
    pool.close().await;
    Ok(())
}
