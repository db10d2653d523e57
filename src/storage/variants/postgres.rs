//! PostgreSQL-backed variant gateway.

use crate::domain::variant::Variant;
use crate::storage::variants::{VariantGateway, VariantOrder};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_VARIANTS: &str = "SELECT id, language_id, country_id, variant_tag, description, \
     created_at, updated_at FROM variants";

#[derive(Clone)]
pub struct PostgresVariantStore {
    pool: PgPool,
    order: VariantOrder,
    filtered_sql: String,
    unfiltered_sql: String,
}

impl PostgresVariantStore {
    pub fn new(pool: PgPool, order: VariantOrder) -> Self {
        let clause = order.sql_clause();
        Self {
            pool,
            order,
            filtered_sql: format!(
                "{} WHERE language_id = $1{} LIMIT $2 OFFSET $3",
                SELECT_VARIANTS, clause
            ),
            unfiltered_sql: format!("{}{} LIMIT $1 OFFSET $2", SELECT_VARIANTS, clause),
        }
    }

    pub fn order(&self) -> VariantOrder {
        self.order
    }

    /// Total number of stored variants (used by preflight, not by pagination).
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM variants")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl VariantGateway for PostgresVariantStore {
    async fn list_filtered(
        &self,
        language_tag_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Variant>> {
        let rows = sqlx::query_as::<_, Variant>(&self.filtered_sql)
            .bind(language_tag_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_unfiltered(&self, limit: i64, offset: i64) -> Result<Vec<Variant>> {
        let rows = sqlx::query_as::<_, Variant>(&self.unfiltered_sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
