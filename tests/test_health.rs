//! Storage failures surface as 503 on `/health` and 500 on listing.

mod common;

use common::{spawn_server, UnavailableGateway};
use language_variant_admin::{InMemoryVariantStore, VariantOrder};
use reqwest::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_health_ok_with_reachable_store() {
    let base = spawn_server(Arc::new(InMemoryVariantStore::new(VariantOrder::IdAsc))).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unreachable_store() {
    let base = spawn_server(Arc::new(UnavailableGateway)).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "unhealthy");

    let resp = reqwest::get(format!("{base}/language-variant?languageTagId=7"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "Database query error");
}

#[tokio::test]
async fn test_client_errors_win_over_storage_errors() {
    let base = spawn_server(Arc::new(UnavailableGateway)).await;

    let resp = reqwest::get(format!("{base}/language-variant?page_token=-1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
