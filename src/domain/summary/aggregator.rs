//! Summary statistics over the full order collection.

use crate::domain::order::Order;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate view of every stored order. Recomputed on each request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of `qty * price` over all orders.
    pub total_revenue: f64,
    /// Median of the per-order `qty * price` values.
    pub median_order_price: f64,
    /// Product with the largest summed quantity. First seen wins on ties.
    pub top_product_by_qty: String,
    /// Distinct product names, compared exactly.
    pub unique_product_count: u64,
}

/// Computes the summary for `orders`. Total over any input; an empty slice
/// yields the all-zero summary.
pub fn summarize(orders: &[Order]) -> Summary {
    if orders.is_empty() {
        return Summary::default();
    }

    let total_revenue: f64 = orders.iter().map(Order::total).sum();

    let mut values: Vec<f64> = orders.iter().map(Order::total).collect();
    values.sort_by(f64::total_cmp);
    let median_order_price = median_of_sorted(&values);

    // Insertion order of the map is first-seen order of the product. Sums are
    // widened to i128 so any number of i64 quantities adds up exactly.
    let mut quantities: IndexMap<&str, i128> = IndexMap::new();
    for order in orders {
        *quantities.entry(order.product.as_str()).or_insert(0) += i128::from(order.qty);
    }

    let mut top = ("", 0i128);
    for (product, qty) in &quantities {
        // Strict `>`: a later product with an equal total never displaces the first.
        if *qty > top.1 {
            top = (*product, *qty);
        }
    }

    Summary {
        total_revenue,
        median_order_price,
        top_product_by_qty: top.0.to_string(),
        unique_product_count: quantities.len() as u64,
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}
