//! Order persistence.
//!
//! [`OrderStore`] is the contract the service depends on. The SQLite store is
//! what the server runs on; the in-memory store backs tests and tools that do
//! not need a database file.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryOrderStore;
pub use sqlite::SqliteOrderStore;

use crate::domain::{NewOrder, Order, OrderFilters, OrdersPage};
use anyhow::Result;
use async_trait::async_trait;

/// Append-only order collection. There is no update or delete.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists `order` under the next id and returns it.
    async fn insert(&self, order: NewOrder) -> Result<Order>;

    /// Filtered page, newest first. `total` ignores `limit`/`offset`.
    async fn query(&self, filters: &OrderFilters) -> Result<OrdersPage>;

    /// Every order in insertion order.
    async fn list_all(&self) -> Result<Vec<Order>>;

    async fn count(&self) -> Result<u64>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}
