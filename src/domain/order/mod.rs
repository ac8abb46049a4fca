//! Order entity and the request-scoped values that flow around it.

use crate::domain::error::OrderError;
use crate::domain::validation::sanitize_string;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A persisted purchase record. Immutable once the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub product: String,
    pub qty: i64,
    pub price: f64,
}

impl Order {
    /// Order value (`qty * price`). Derived, never stored.
    pub fn total(&self) -> f64 {
        self.qty as f64 * self.price
    }
}

/// Validated insert payload.
///
/// The only way to build one is [`NewOrder::new`], which normalizes the product
/// name and rejects anything the store would not accept. Stores can therefore
/// persist a `NewOrder` without re-checking it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    product: String,
    qty: i64,
    price: f64,
}

impl NewOrder {
    pub fn new(product: &str, qty: i64, price: f64) -> Result<Self, OrderError> {
        let product = sanitize_string(product);
        let mut errors = Vec::new();
        if product.is_empty() {
            errors.push("Product is required and must be a non-empty string".to_string());
        }
        if qty < 0 {
            errors.push("Quantity is required and must be a non-negative integer".to_string());
        }
        if !price.is_finite() || price < 0.0 {
            errors.push("Price is required and must be a non-negative number".to_string());
        }
        if !errors.is_empty() {
            return Err(OrderError::Validation(errors));
        }
        Ok(Self { product, qty, price })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Attaches a store-assigned id.
    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            product: self.product,
            qty: self.qty,
            price: self.price,
        }
    }
}

/// Raw create-order body.
///
/// Fields stay untyped so that a wrong JSON type is reported as a validation
/// message alongside every other violation instead of failing decoding.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct OrderInput {
    #[serde(default)]
    #[schema(value_type = String)]
    pub product: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = i64)]
    pub qty: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: Option<JsonValue>,
}

impl OrderInput {
    pub fn new(product: &str, qty: i64, price: f64) -> Self {
        Self {
            product: Some(JsonValue::from(product)),
            qty: Some(JsonValue::from(qty)),
            price: Some(JsonValue::from(price)),
        }
    }

    /// Converts an input that already passed an order policy into a [`NewOrder`].
    pub fn to_new_order(&self) -> Result<NewOrder, OrderError> {
        let product = self.product.as_ref().and_then(JsonValue::as_str).unwrap_or("");
        let qty = self
            .qty
            .as_ref()
            .and_then(JsonValue::as_f64)
            .filter(|q| q.fract() == 0.0 && *q <= i64::MAX as f64)
            .map(|q| q as i64)
            .unwrap_or(-1);
        let price = self
            .price
            .as_ref()
            .and_then(JsonValue::as_f64)
            .unwrap_or(-1.0);
        NewOrder::new(product, qty, price)
    }
}

/// Normalized query filters, produced by filter validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilters {
    /// Case-insensitive substring match on the product name.
    pub product: Option<String>,
    pub limit: Option<u64>,
    pub offset: u64,
}

impl OrderFilters {
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// True when `order` passes the product filter.
    pub fn matches(&self, order: &Order) -> bool {
        match self.product.as_deref() {
            // ASCII-only folding, the same as SQLite's LIKE.
            Some(needle) => order
                .product
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase()),
            None => true,
        }
    }
}

/// One page of a filtered query. `total` is the unpaginated filtered count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub limit: Option<u64>,
    pub offset: u64,
}
