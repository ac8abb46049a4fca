//! Query-string filters for the order listing.

use crate::domain::error::OrderError;
use crate::domain::order::OrderFilters;
use crate::domain::validation::{sanitize_string, ValidationResult};
use serde::Deserialize;
use utoipa::IntoParams;

/// Exclusive upper bound for `limit` and `offset` (2^63, SQLite's integer range).
const MAX_QUERY_NUMBER: f64 = 9_223_372_036_854_775_808.0;

/// Raw `GET /api/orders` query parameters, exactly as received.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQueryParams {
    /// Case-insensitive product substring.
    pub product: Option<String>,
    /// Page size (positive integer).
    pub limit: Option<String>,
    /// Rows to skip (non-negative integer).
    pub offset: Option<String>,
}

impl OrderQueryParams {
    /// Validates and normalizes into [`OrderFilters`].
    ///
    /// Fractional values are truncated toward zero, so `limit=2.9` means 2.
    pub fn normalize(&self) -> Result<OrderFilters, OrderError> {
        validate_order_filters(self).into_result()?;

        let product = self
            .product
            .as_deref()
            .map(sanitize_string)
            .filter(|p| !p.is_empty());
        // Validation bounds both below MAX_QUERY_NUMBER, so the casts are exact.
        let limit = present(&self.limit)
            .and_then(parse_number)
            .map(|n| n.trunc() as u64);
        let offset = present(&self.offset)
            .and_then(parse_number)
            .map(|n| n.trunc() as u64)
            .unwrap_or(0);

        Ok(OrderFilters {
            product,
            limit,
            offset,
        })
    }
}

/// Checks `limit` (positive) and `offset` (non-negative) independently.
/// Absent or empty parameters are not checked.
pub fn validate_order_filters(params: &OrderQueryParams) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(limit) = present(&params.limit).map(parse_number) {
        match limit {
            Some(n) if n >= MAX_QUERY_NUMBER => errors.push("Limit is too large".to_string()),
            Some(n) if n >= 1.0 => {}
            _ => errors.push("Limit must be a positive number".to_string()),
        }
    }

    if let Some(offset) = present(&params.offset).map(parse_number) {
        match offset {
            Some(n) if n >= MAX_QUERY_NUMBER => errors.push("Offset is too large".to_string()),
            Some(n) if n >= 0.0 => {}
            _ => errors.push("Offset must be a non-negative number".to_string()),
        }
    }

    ValidationResult::from_errors(errors)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
