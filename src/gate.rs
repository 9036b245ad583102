//! Startup gate: block until the database accepts connections.
//!
//! There is no attempt limit. The gate is meant to run under an orchestrator
//! that applies its own startup timeout.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Run `attempt` until it succeeds, sleeping `delay` after each retryable failure.
/// A failure that `is_retryable` rejects is returned immediately.
pub async fn retry_until_ready<F, Fut, T, E, R>(delay: Duration, is_retryable: R, mut attempt: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    R: Fn(&E) -> bool,
{
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        match attempt().await {
            Ok(value) => {
                tracing::info!(attempts, "db is ready");
                return Ok(value);
            }
            Err(e) if is_retryable(&e) => {
                tracing::warn!(
                    attempt = attempts,
                    retry_in_secs = delay.as_secs_f64(),
                    error = %e,
                    "db unavailable"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                tracing::error!(attempt = attempts, error = %e, "db connection failed permanently");
                return Err(e);
            }
        }
    }
}

/// Malformed connection settings will never succeed; everything else may be transient.
pub fn is_transient(e: &sqlx::Error) -> bool {
    !matches!(e, sqlx::Error::Configuration(_))
}

/// Open a pool once the database at `database_url` accepts connections.
pub async fn wait_for_database(
    database_url: &str,
    max_connections: u32,
    delay: Duration,
) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Wait for db connection");
    retry_until_ready(delay, is_transient, || {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
    })
    .await
}
