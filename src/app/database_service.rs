//! Database bootstrap.
//!
//! Owns the PostgreSQL connection pool for the process. The pool is handed to the
//! storage gateway explicitly; nothing reaches for a global connection.

use crate::infra::config::Config;
use crate::storage::variants::{PostgresVariantStore, VariantOrder};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Migrations embedded from `migrations/` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!();

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connects to the configured database and verifies it answers.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        let service = Self { pool };
        service.ping().await?;
        info!(max_connections = config.max_connections, "database connection established");
        Ok(service)
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Applies pending migrations.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        MIGRATOR.run(&self.pool).await?;
        info!("database migrations applied");
        Ok(())
    }

    /// Whether the `variants` table exists yet.
    pub async fn schema_ready(&self) -> anyhow::Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT to_regclass('public.variants') IS NOT NULL")
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub fn variant_store(&self, order: VariantOrder) -> PostgresVariantStore {
        PostgresVariantStore::new(self.pool.clone(), order)
    }
}
