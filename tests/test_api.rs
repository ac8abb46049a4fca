//! End-to-end HTTP test: real router on an ephemeral port, SQLite in memory.

use anyhow::anyhow;
use async_trait::async_trait;
use order_dashboard::{
    transport, NewOrder, Order, OrderFilters, OrderService, OrderStore, OrdersPage,
    SqliteOrderStore,
};
use serde_json::{json, Value};
use std::sync::Arc;

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;
type Server = (String, tokio::task::JoinHandle<()>);

async fn spawn_server() -> TestResult<Server> {
    let store = SqliteOrderStore::connect("sqlite::memory:", 1).await?;
    serve(Arc::new(store)).await
}

async fn serve(store: Arc<dyn OrderStore>) -> TestResult<Server> {
    let state = transport::http::AppState::new(OrderService::new(store));
    let router = transport::http::create_router(state);

    // Bind to an ephemeral port to avoid conflicts with a running API server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok((format!("http://127.0.0.1:{}", port), handle))
}

/// Store whose every call fails, standing in for an unreachable database.
struct BrokenStore;

#[async_trait]
impl OrderStore for BrokenStore {
    async fn insert(&self, _order: NewOrder) -> anyhow::Result<Order> {
        Err(anyhow!("disk on fire"))
    }

    async fn query(&self, _filters: &OrderFilters) -> anyhow::Result<OrdersPage> {
        Err(anyhow!("disk on fire"))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Order>> {
        Err(anyhow!("disk on fire"))
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Err(anyhow!("disk on fire"))
    }

    fn backend(&self) -> &'static str {
        "broken"
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_order_lifecycle_over_http() -> TestResult<()> {
    let (base_url, server) = spawn_server().await?;
    let client = reqwest::Client::new();

    // --- empty store ---
    let summary: Value = client
        .get(format!("{}/api/summary", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        summary,
        json!({
            "totalRevenue": 0.0,
            "medianOrderPrice": 0.0,
            "topProductByQty": "",
            "uniqueProductCount": 0
        })
    );

    // --- create ---
    let mut ids = Vec::new();
    for (product, qty, price) in [
        ("Apple", 5, 2.5),
        ("Banana", 3, 1.2),
        ("  Green   Apple ", 10, 0.8),
        ("Cherry", 1, 4.0),
        ("Date", 2, 1.0),
    ] {
        let resp = client
            .post(format!("{}/api/orders", base_url))
            .json(&json!({"product": product, "qty": qty, "price": price}))
            .send()
            .await?;
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        let created: Value = resp.json().await?;
        assert!(created["id"].is_i64());
        ids.push(created["id"].as_i64().unwrap());
    }
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    // --- filtered + paginated ---
    let page: Value = client
        .get(format!("{}/api/orders?product=apple&limit=1&offset=0", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(page["total"], 2);
    assert_eq!(page["limit"], 1);
    assert_eq!(page["offset"], 0);
    assert_eq!(page["orders"].as_array().unwrap().len(), 1);
    assert_eq!(page["orders"][0]["product"], "Green Apple");

    // --- unfiltered: limit echoes null ---
    let all: Value = client
        .get(format!("{}/api/orders", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(all["total"], 5);
    assert!(all["limit"].is_null());
    assert_eq!(all["orders"][0]["id"], json!(ids[4]));

    // --- summary ---
    let summary: Value = client
        .get(format!("{}/api/summary", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(summary["topProductByQty"], "Green Apple");
    assert_eq!(summary["uniqueProductCount"], 5);
    // values [12.5, 3.6, 8.0, 4.0, 2.0] -> median 4.0
    assert_eq!(summary["medianOrderPrice"], 4.0);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn test_validation_errors_are_joined() -> TestResult<()> {
    let (base_url, server) = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/orders", base_url))
        .json(&json!({"product": "", "qty": -1, "price": "free"}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(
        body["error"],
        "Product is required and must be a non-empty string, \
         Quantity is required and must be a non-negative integer, \
         Price is required and must be a non-negative number"
    );

    let resp = client
        .get(format!("{}/api/orders?limit=0&offset=-2", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(
        body["error"],
        "Limit must be a positive number, Offset must be a non-negative number"
    );

    let resp = client
        .post(format!("{}/api/orders", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn test_health_and_unknown_route() -> TestResult<()> {
    let (base_url, server) = spawn_server().await?;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{}/api/health", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["status"], "OK");
    let timestamp = health["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));

    let resp = client.get(format!("{}/api/nope", base_url)).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({"error": "Route not found"}));

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn test_storage_failures_return_generic_500() -> TestResult<()> {
    let (base_url, server) = serve(Arc::new(BrokenStore)).await?;
    let client = reqwest::Client::new();

    let requests = [
        client.get(format!("{}/api/summary", base_url)),
        client.get(format!("{}/api/orders?product=pen&limit=5", base_url)),
        client
            .post(format!("{}/api/orders", base_url))
            .json(&json!({"product": "Pen", "qty": 1, "price": 2.5})),
    ];
    for request in requests {
        let resp = request.send().await?;
        assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = resp.json().await?;
        assert_eq!(body, json!({"error": "Internal server error"}));
    }

    // Validation still runs before the store is touched.
    let resp = client
        .post(format!("{}/api/orders", base_url))
        .json(&json!({"product": "", "qty": 1, "price": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn test_summary_survives_huge_quantities() -> TestResult<()> {
    let (base_url, server) = spawn_server().await?;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(format!("{}/api/orders", base_url))
            .json(&json!({"product": "Pen", "qty": 5_000_000_000_000_000_000i64, "price": 1}))
            .send()
            .await?;
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    }

    let resp = client.get(format!("{}/api/summary", base_url)).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let summary: Value = resp.json().await?;
    assert_eq!(summary["topProductByQty"], "Pen");
    assert_eq!(summary["uniqueProductCount"], 1);

    server.abort();
    let _ = server.await;
    Ok(())
}
