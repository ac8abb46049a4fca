//! In-memory implementation of OrderStore for tests and tooling.

use crate::domain::{NewOrder, Order, OrderFilters, OrdersPage};
use crate::storage::OrderStore;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    orders: Vec<Order>,
    last_id: i64,
}

/// Vector-backed store. Ids start at 1 and are handed out under the write
/// lock, so concurrent inserts never share an id.
#[derive(Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Inner>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<Order> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let order = order.into_order(inner.last_id);
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn query(&self, filters: &OrderFilters) -> Result<OrdersPage> {
        let inner = self.inner.read().await;
        let matching: Vec<&Order> = inner
            .orders
            .iter()
            .rev()
            .filter(|o| filters.matches(o))
            .collect();

        let total = matching.len() as u64;
        let take = filters
            .limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        let skip = usize::try_from(filters.offset).unwrap_or(usize::MAX);
        let orders = matching
            .into_iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect();

        Ok(OrdersPage {
            orders,
            total,
            limit: filters.limit,
            offset: filters.offset,
        })
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        Ok(self.inner.read().await.orders.clone())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.inner.read().await.orders.len() as u64)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
