// src/bin/seed.rs
// Loads the sample order set into the configured database.

use std::sync::Arc;
use tracing::info;

use order_dashboard::infra::{config, logging};
use order_dashboard::{NewOrder, OrderService, OrderStore, SqliteOrderStore};

const SEED_DATA: &[(&str, i64, f64)] = &[
    ("MacBook Pro", 2, 2499.99),
    ("iPhone 15", 5, 999.99),
    ("AirPods Pro", 8, 249.99),
    ("iPad Air", 3, 599.99),
    ("Apple Watch", 4, 399.99),
    ("MacBook Pro", 1, 2499.99),
    ("Magic Mouse", 6, 79.99),
    ("Magic Keyboard", 2, 99.99),
    ("Studio Display", 1, 1599.99),
    ("iPhone 15", 2, 999.99),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let database_url = config::database_url();
    info!(%database_url, "initializing database");
    let store = SqliteOrderStore::connect(&database_url, config::db_max_connections()?).await?;
    let store = Arc::new(store);

    let orders = SEED_DATA
        .iter()
        .map(|(product, qty, price)| NewOrder::new(product, *qty, *price))
        .collect::<Result<Vec<_>, _>>()?;

    let service = OrderService::new(store.clone());
    let created = service.seed(orders).await?;

    info!(
        inserted = created.len(),
        total = store.count().await?,
        "database seeded"
    );
    Ok(())
}
