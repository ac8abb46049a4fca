//! The order service.
//!
//! This module sits between the HTTP transport and the store. It is
//! responsible for:
//! 1.  Validating create requests against the server policy and filters
//!     against the query rules before anything reaches the store.
//! 2.  Normalizing input (product whitespace, numeric query parameters).
//! 3.  Feeding the full order list into the summary aggregator.

use crate::domain::validation::{OrderPolicy, OrderQueryParams, ServerOrderPolicy};
use crate::domain::{summarize, NewOrder, Order, OrderError, OrderInput, OrdersPage, Summary};
use crate::storage::OrderStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Order operations over an injected store handle.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Validates `input` with the server policy and persists it.
    pub async fn create_order(&self, input: &OrderInput) -> Result<Order, OrderError> {
        let policy = ServerOrderPolicy;
        let result = policy.validate(input);
        if !result.is_valid {
            warn!(policy = policy.name(), errors = ?result.errors, "rejected order");
        }
        result.into_result()?;

        let new_order = input.to_new_order()?;
        let order = self.store.insert(new_order).await?;
        info!(id = order.id, product = %order.product, qty = order.qty, "order created");
        Ok(order)
    }

    /// Validates the raw query parameters and returns the matching page.
    pub async fn list_orders(&self, params: &OrderQueryParams) -> Result<OrdersPage, OrderError> {
        let filters = params.normalize().map_err(|e| {
            warn!(errors = ?e.messages(), "rejected order filters");
            e
        })?;
        debug!(?filters, backend = self.store.backend(), "querying orders");
        Ok(self.store.query(&filters).await?)
    }

    /// Summary statistics over every stored order.
    pub async fn summary(&self) -> Result<Summary, OrderError> {
        let orders = self.store.list_all().await?;
        Ok(summarize(&orders))
    }

    /// Inserts already validated orders in order, returning them with ids.
    pub async fn seed(&self, orders: Vec<NewOrder>) -> Result<Vec<Order>, OrderError> {
        let mut created = Vec::with_capacity(orders.len());
        for order in orders {
            let order = self.store.insert(order).await?;
            info!(
                id = order.id,
                product = %order.product,
                qty = order.qty,
                price = order.price,
                "seeded order"
            );
            created.push(order);
        }
        Ok(created)
    }
}
