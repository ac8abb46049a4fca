//! Client-side ordering of an already fetched page of orders.

use crate::domain::order::Order;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Product,
    Qty,
    Price,
    /// Derived `qty * price`.
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortField::Product, SortDirection::Asc)
    }
}

/// Returns a sorted copy of `orders`; the input is left untouched.
///
/// The sort is stable, so orders with equal keys keep their relative order in
/// both directions.
pub fn sort_orders(orders: &[Order], config: SortConfig) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by(config.field, a, b);
        match config.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_by(field: SortField, a: &Order, b: &Order) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Product => a.product.to_lowercase().cmp(&b.product.to_lowercase()),
        SortField::Qty => a.qty.cmp(&b.qty),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Total => a.total().total_cmp(&b.total()),
    }
}

/// Header-click toggle: the active field flips direction, any other field
/// becomes active in ascending order.
pub fn next_sort_config(
    current_field: SortField,
    current_direction: SortDirection,
    new_field: SortField,
) -> SortConfig {
    if current_field == new_field {
        SortConfig::new(new_field, current_direction.flipped())
    } else {
        SortConfig::new(new_field, SortDirection::Asc)
    }
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Product => "product",
            SortField::Qty => "qty",
            SortField::Price => "price",
            SortField::Total => "total",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "product" => Ok(SortField::Product),
            "qty" => Ok(SortField::Qty),
            "price" => Ok(SortField::Price),
            "total" => Ok(SortField::Total),
            other => Err(format!("unknown sort field '{}'", other)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}
