//! Pool-level bootstrap for the characters table.

use crate::error::AppError;
use crate::sql::create_characters_table;
use sqlx::PgPool;

/// Create the characters table if it does not exist.
pub async fn ensure_catalog_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&create_characters_table()).execute(pool).await?;
    tracing::info!("characters table ready");
    Ok(())
}
