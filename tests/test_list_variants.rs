//! End-to-end listing tests against the HTTP router backed by the in-memory store.

mod common;

use common::{seeded_store, spawn_server, variant};
use language_variant_admin::{InMemoryVariantStore, VariantOrder, VariantPage};
use reqwest::StatusCode;
use std::sync::Arc;

async fn get(client: &reqwest::Client, url: &str) -> (StatusCode, String) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

async fn get_page(client: &reqwest::Client, url: &str) -> VariantPage {
    let resp = client.get(url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "GET {url}");
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    resp.json::<VariantPage>().await.unwrap()
}

fn ids(page: &VariantPage) -> Vec<i32> {
    page.variants.iter().map(|v| v.id).collect()
}

#[tokio::test]
async fn test_walks_filtered_pages_to_the_end() {
    let store = seeded_store((1..=25).map(|id| variant(id, Some(7))), VariantOrder::IdAsc).await;
    let base = spawn_server(store).await;
    let client = reqwest::Client::new();

    let first = get_page(
        &client,
        &format!("{base}/language-variant?languageTagId=7&page_size=10&page_token=0"),
    )
    .await;
    assert_eq!(ids(&first), (1..=10).collect::<Vec<_>>());
    assert_eq!(first.next_page_token.as_deref(), Some("10"));

    let second = get_page(
        &client,
        &format!("{base}/language-variant?languageTagId=7&page_size=10&page_token=10"),
    )
    .await;
    assert_eq!(ids(&second), (11..=20).collect::<Vec<_>>());
    assert_eq!(second.next_page_token.as_deref(), Some("20"));

    let last = get_page(
        &client,
        &format!("{base}/language-variant?languageTagId=7&page_size=10&page_token=20"),
    )
    .await;
    assert_eq!(ids(&last), (21..=25).collect::<Vec<_>>());
    assert_eq!(last.next_page_token, None);
}

#[tokio::test]
async fn test_exact_multiple_needs_one_empty_fetch() {
    let rows = (1..=4).map(|id| variant(id, Some(3))).collect();
    let store = InMemoryVariantStore::with_rows(rows, VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let full = get_page(&client, &format!("{base}/language-variant?page_size=4&page_token=0")).await;
    assert_eq!(full.variants.len(), 4);
    let token = full.next_page_token.expect("full page carries a token");
    assert_eq!(token, "4");

    let (status, body) = get(
        &client,
        &format!("{base}/language-variant?page_size=4&page_token={token}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"variants":[]}"#);
}

#[tokio::test]
async fn test_page_size_never_exceeded() {
    let rows = (1..=30).map(|id| variant(id, Some(1 + id % 2))).collect();
    let store = InMemoryVariantStore::with_rows(rows, VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    for size in [1, 3, 7, 15, 40] {
        let page = get_page(&client, &format!("{base}/language-variant?page_size={size}")).await;
        assert!(page.variants.len() <= size, "page_size={size}");

        let page = get_page(
            &client,
            &format!("{base}/language-variant?languageTagId=2&page_size={size}"),
        )
        .await;
        assert!(page.variants.len() <= size, "filtered page_size={size}");
        assert!(page.variants.iter().all(|v| v.language_tag_id == 2));
    }
}

#[tokio::test]
async fn test_bad_page_size_means_default() {
    let rows = (1..=12).map(|id| variant(id, None)).collect();
    let store = InMemoryVariantStore::with_rows(rows, VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let omitted = get_page(&client, &format!("{base}/language-variant")).await;
    assert_eq!(omitted.variants.len(), 10);
    assert_eq!(omitted.next_page_token.as_deref(), Some("10"));

    for raw in ["0", "-5", "abc"] {
        let page = get_page(&client, &format!("{base}/language-variant?page_size={raw}")).await;
        assert_eq!(page, omitted, "page_size={raw}");
    }
}

#[tokio::test]
async fn test_invalid_token_and_filter_are_client_errors() {
    let store = InMemoryVariantStore::with_rows(vec![variant(1, Some(7))], VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    for raw in ["-1", "abc"] {
        let (status, body) =
            get(&client, &format!("{base}/language-variant?page_token={raw}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "page_token={raw}");
        assert_eq!(body, "Invalid page_token");
    }

    let (status, body) = get(&client, &format!("{base}/language-variant?languageTagId=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid languageTagId");
}

#[tokio::test]
async fn test_missing_filter_lists_every_variant() {
    let rows = vec![
        variant(1, Some(7)),
        variant(2, None),
        variant(3, Some(9)),
    ];
    let store = InMemoryVariantStore::with_rows(rows, VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let all = get_page(&client, &format!("{base}/language-variant?languageTagId=")).await;
    assert_eq!(ids(&all), vec![1, 2, 3]);
    assert_eq!(all.next_page_token, None);

    let unowned = &all.variants[1];
    assert_eq!(unowned.language_tag_id, 0);
    assert_eq!(unowned.variant_tag, "variant-2");

    let only_seven = get_page(&client, &format!("{base}/language-variant?languageTagId=7")).await;
    assert_eq!(ids(&only_seven), vec![1]);
}

#[tokio::test]
async fn test_wire_shape() {
    let mut row = variant(42, Some(5));
    row.description = None;
    row.country_id = Some(11);
    let store = InMemoryVariantStore::with_rows(vec![row], VariantOrder::IdAsc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{base}/language-variant?page_size=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "variants": [
                {"id": 42, "language_tag_id": 5, "variant_tag": "variant-42", "description": ""}
            ],
            "next_page_token": "1"
        })
    );
}

#[tokio::test]
async fn test_descending_order_is_respected() {
    let rows = (1..=5).map(|id| variant(id, None)).collect();
    let store = InMemoryVariantStore::with_rows(rows, VariantOrder::IdDesc);
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let page = get_page(&client, &format!("{base}/language-variant?page_size=2&page_token=1")).await;
    assert_eq!(ids(&page), vec![4, 3]);
    assert_eq!(page.next_page_token.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_repeated_keys_use_first_value() {
    let rows = (1..=12)
        .map(|id| variant(id, Some(if id % 2 == 0 { 8 } else { 7 })))
        .chain((13..=20).map(|id| variant(id, None)));
    let store = seeded_store(rows, VariantOrder::IdAsc).await;
    let base = spawn_server(store).await;
    let client = reqwest::Client::new();

    let page = get_page(
        &client,
        &format!("{base}/language-variant?page_size=5&page_size=abc"),
    )
    .await;
    assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
    assert_eq!(page.next_page_token.as_deref(), Some("5"));

    let page = get_page(
        &client,
        &format!("{base}/language-variant?languageTagId=7&languageTagId=8"),
    )
    .await;
    assert_eq!(ids(&page), vec![1, 3, 5, 7, 9, 11]);

    let page = get_page(
        &client,
        &format!("{base}/language-variant?page_size=3&page_token=0&page_token=1"),
    )
    .await;
    assert_eq!(ids(&page), vec![1, 2, 3]);
    assert_eq!(page.next_page_token.as_deref(), Some("3"));

    let (status, body) = get(
        &client,
        &format!("{base}/language-variant?page_token=abc&page_token=0"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid page_token");
}
