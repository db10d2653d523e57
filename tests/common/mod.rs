#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use language_variant_admin::{
    transport, InMemoryVariantStore, Variant, VariantGateway, VariantOrder, VariantService,
};
use std::sync::Arc;

pub fn variant(id: i32, language_id: Option<i32>) -> Variant {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::seconds(id as i64);
    Variant {
        id,
        language_id,
        country_id: None,
        variant_tag: format!("variant-{id}"),
        description: Some(format!("Variant number {id}")),
        created_at: ts,
        updated_at: ts,
    }
}

/// In-memory store filled one row at a time, as inserts would arrive.
pub async fn seeded_store<I>(rows: I, order: VariantOrder) -> Arc<InMemoryVariantStore>
where
    I: IntoIterator<Item = Variant>,
{
    let store = InMemoryVariantStore::new(order);
    for row in rows {
        store.insert(row).await;
    }
    Arc::new(store)
}

/// Gateway whose every call fails, standing in for an unreachable database.
pub struct UnavailableGateway;

#[async_trait]
impl VariantGateway for UnavailableGateway {
    async fn list_filtered(&self, _: i32, _: i64, _: i64) -> anyhow::Result<Vec<Variant>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn list_unfiltered(&self, _: i64, _: i64) -> anyhow::Result<Vec<Variant>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Serves the real router on an ephemeral port and returns its base URL.
pub async fn spawn_server(gateway: Arc<dyn VariantGateway>) -> String {
    let state = transport::http::AppState {
        variant_service: Arc::new(VariantService::new(gateway)),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
