//! Storage gateway for variant listings.
//!
//! The pagination code only sees [`VariantGateway`]; the PostgreSQL store is used by the
//! server and the in-memory store backs tests and local runs without a database.

use crate::domain::variant::Variant;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryVariantStore;
pub use postgres::PostgresVariantStore;

/// Read-only access to the `variants` table.
///
/// Each call is a single round trip. Implementations must return rows in the order
/// described by their [`VariantOrder`].
#[async_trait]
pub trait VariantGateway: Send + Sync {
    /// Variants owned by `language_tag_id`, at most `limit` rows starting at `offset`.
    async fn list_filtered(
        &self,
        language_tag_id: i32,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Variant>>;

    /// All variants, at most `limit` rows starting at `offset`.
    async fn list_unfiltered(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Variant>>;

    /// Cheap reachability check used by `/health`.
    async fn ping(&self) -> anyhow::Result<()>;
}

/// Row order applied to both list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantOrder {
    #[default]
    IdAsc,
    IdDesc,
    CreatedAtAsc,
    CreatedAtDesc,
    /// Whatever order the store hands back (no `ORDER BY`).
    Storage,
}

impl VariantOrder {
    /// `ORDER BY` clause for this order. Ties on `created_at` are broken by `id`.
    pub fn sql_clause(self) -> &'static str {
        match self {
            VariantOrder::IdAsc => " ORDER BY id ASC",
            VariantOrder::IdDesc => " ORDER BY id DESC",
            VariantOrder::CreatedAtAsc => " ORDER BY created_at ASC, id ASC",
            VariantOrder::CreatedAtDesc => " ORDER BY created_at DESC, id DESC",
            VariantOrder::Storage => "",
        }
    }

    /// Sorts `rows` the way [`Self::sql_clause`] would. `Storage` leaves them untouched.
    pub fn sort(self, rows: &mut [Variant]) {
        match self {
            VariantOrder::IdAsc => rows.sort_by_key(|v| v.id),
            VariantOrder::IdDesc => rows.sort_by(|a, b| b.id.cmp(&a.id)),
            VariantOrder::CreatedAtAsc => rows.sort_by_key(|v| (v.created_at, v.id)),
            VariantOrder::CreatedAtDesc => {
                rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
            }
            VariantOrder::Storage => {}
        }
    }
}

impl FromStr for VariantOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "id_asc" => Ok(VariantOrder::IdAsc),
            "id_desc" => Ok(VariantOrder::IdDesc),
            "created_at" | "created_at_asc" => Ok(VariantOrder::CreatedAtAsc),
            "created_at_desc" => Ok(VariantOrder::CreatedAtDesc),
            "none" | "storage" => Ok(VariantOrder::Storage),
            other => Err(format!(
                "unknown variant order '{}' (expected id, id_desc, created_at, created_at_desc or none)",
                other
            )),
        }
    }
}

impl fmt::Display for VariantOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantOrder::IdAsc => "id",
            VariantOrder::IdDesc => "id_desc",
            VariantOrder::CreatedAtAsc => "created_at",
            VariantOrder::CreatedAtDesc => "created_at_desc",
            VariantOrder::Storage => "none",
        };
        f.write_str(name)
    }
}
