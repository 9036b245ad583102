//! PostgreSQL-backed repository.

use super::CharacterRepository;
use crate::error::AppError;
use crate::model::{Character, CharacterId};
use crate::sql::{select_by_id, select_ids, select_list};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn list_by_name_contains(&self, name: Option<&str>) -> Result<Vec<Character>, AppError> {
        // TEXT columns cannot hold NUL, and Postgres rejects it in a bound parameter.
        if name.is_some_and(|n| n.contains('\0')) {
            return Ok(Vec::new());
        }
        let q = select_list(name);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Character>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, AppError> {
        let q = select_by_id();
        tracing::debug!(sql = %q.sql, id, "query");
        let row = sqlx::query_as::<_, Character>(&q.sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn all_ids(&self) -> Result<Vec<CharacterId>, AppError> {
        let q = select_ids();
        tracing::debug!(sql = %q.sql, "query");
        let ids = sqlx::query_scalar::<_, CharacterId>(&q.sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
