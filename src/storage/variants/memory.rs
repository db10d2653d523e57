//! In-memory variant gateway.

use crate::domain::variant::Variant;
use crate::storage::variants::{VariantGateway, VariantOrder};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Holds variants in insertion order and pages over them like the SQL store would.
#[derive(Default)]
pub struct InMemoryVariantStore {
    rows: RwLock<Vec<Variant>>,
    order: VariantOrder,
}

impl InMemoryVariantStore {
    pub fn new(order: VariantOrder) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            order,
        }
    }

    pub fn with_rows(rows: Vec<Variant>, order: VariantOrder) -> Self {
        Self {
            rows: RwLock::new(rows),
            order,
        }
    }

    pub async fn insert(&self, row: Variant) {
        self.rows.write().await.push(row);
    }

    async fn page<F>(&self, keep: F, limit: i64, offset: i64) -> Vec<Variant>
    where
        F: Fn(&Variant) -> bool,
    {
        let mut matching: Vec<Variant> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|v| keep(*v))
            .cloned()
            .collect();
        self.order.sort(&mut matching);

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(0);
        matching.into_iter().skip(skip).take(take).collect()
    }
}

#[async_trait]
impl VariantGateway for InMemoryVariantStore {
    async fn list_filtered(
        &self,
        language_tag_id: i32,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Variant>> {
        Ok(self
            .page(|v| v.language_id == Some(language_tag_id), limit, offset)
            .await)
    }

    async fn list_unfiltered(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Variant>> {
        Ok(self.page(|_| true, limit, offset).await)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
