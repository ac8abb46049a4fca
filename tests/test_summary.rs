//! Summary aggregation: revenue, median, top product tie-break, distinct count.

use order_dashboard::{summarize, Order, Summary};

fn order(id: i64, product: &str, qty: i64, price: f64) -> Order {
    Order {
        id,
        product: product.to_string(),
        qty,
        price,
    }
}

#[test]
fn test_empty_input_yields_zero_summary() {
    let summary = summarize(&[]);
    assert_eq!(
        summary,
        Summary {
            total_revenue: 0.0,
            median_order_price: 0.0,
            top_product_by_qty: String::new(),
            unique_product_count: 0,
        }
    );
}

#[test]
fn test_median_uses_order_value_not_unit_price() {
    let orders = vec![
        order(1, "Apple", 5, 2.5),
        order(2, "Banana", 3, 1.2),
        order(3, "Cherry", 10, 0.8),
    ];
    let summary = summarize(&orders);
    // values [12.5, 3.6, 8.0] -> sorted [3.6, 8.0, 12.5]
    assert_eq!(summary.median_order_price, 10.0 * 0.8);
    assert_eq!(summary.total_revenue, 5.0 * 2.5 + 3.0 * 1.2 + 10.0 * 0.8);
    assert_eq!(summary.unique_product_count, 3);
    assert_eq!(summary.top_product_by_qty, "Cherry");
}

#[test]
fn test_median_of_even_count_averages_middle_pair() {
    let orders = vec![
        order(1, "A", 1, 10.0),
        order(2, "B", 1, 40.0),
        order(3, "C", 1, 20.0),
        order(4, "D", 1, 30.0),
    ];
    assert_eq!(summarize(&orders).median_order_price, 25.0);
}

#[test]
fn test_single_order() {
    let summary = summarize(&[order(7, "Lamp", 3, 4.0)]);
    assert_eq!(summary.total_revenue, 12.0);
    assert_eq!(summary.median_order_price, 12.0);
    assert_eq!(summary.top_product_by_qty, "Lamp");
    assert_eq!(summary.unique_product_count, 1);
}

#[test]
fn test_total_revenue_matches_sequential_sum() {
    let orders = vec![
        order(1, "MacBook Pro", 2, 2499.99),
        order(2, "iPhone 15", 5, 999.99),
        order(3, "AirPods Pro", 8, 249.99),
        order(4, "MacBook Pro", 1, 2499.99),
    ];
    let expected = orders
        .iter()
        .fold(0.0, |acc, o| acc + o.qty as f64 * o.price);
    assert_eq!(summarize(&orders).total_revenue, expected);
}

#[test]
fn test_top_product_sums_quantities_across_orders() {
    let orders = vec![
        order(1, "Pen", 4, 1.0),
        order(2, "Ink", 5, 1.0),
        order(3, "Pen", 3, 1.0),
    ];
    assert_eq!(summarize(&orders).top_product_by_qty, "Pen");
}

#[test]
fn test_top_product_tie_keeps_first_seen() {
    let orders = vec![
        order(1, "Pen", 2, 1.0),
        order(2, "Ink", 5, 1.0),
        order(3, "Pen", 3, 1.0),
    ];
    // Pen and Ink both total 5; Pen was seen first.
    assert_eq!(summarize(&orders).top_product_by_qty, "Pen");
}

#[test]
fn test_top_product_empty_when_all_quantities_zero() {
    let orders = vec![order(1, "Pen", 0, 1.0), order(2, "Ink", 0, 2.0)];
    let summary = summarize(&orders);
    assert_eq!(summary.top_product_by_qty, "");
    assert_eq!(summary.unique_product_count, 2);
}

#[test]
fn test_top_product_quantity_sum_beyond_i64_range() {
    let big = i64::MAX / 2 + 1;
    let orders = vec![
        order(1, "Pen", big, 1.0),
        order(2, "Desk", i64::MAX, 1.0),
        order(3, "Pen", big, 1.0),
    ];
    // Pen sums to i64::MAX + 1, which beats Desk's single i64::MAX order.
    let summary = summarize(&orders);
    assert_eq!(summary.top_product_by_qty, "Pen");
    assert_eq!(summary.unique_product_count, 2);
}

#[test]
fn test_unique_count_is_case_sensitive() {
    let orders = vec![
        order(1, "apple", 1, 1.0),
        order(2, "Apple", 1, 1.0),
        order(3, "apple", 1, 1.0),
    ];
    assert_eq!(summarize(&orders).unique_product_count, 2);
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = summarize(&[order(1, "Pen", 2, 1.5)]);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalRevenue"], 3.0);
    assert_eq!(json["medianOrderPrice"], 3.0);
    assert_eq!(json["topProductByQty"], "Pen");
    assert_eq!(json["uniqueProductCount"], 1);
}
