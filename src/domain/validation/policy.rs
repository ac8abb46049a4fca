//! Order-creation policies.
//!
//! Two tiers exist: [`ServerOrderPolicy`] is what the API enforces before
//! anything reaches the store, [`FormOrderPolicy`] is the stricter check a
//! client runs before submitting. They are separate types so each contract can
//! be read and tested on its own.

use crate::domain::order::OrderInput;
use crate::domain::validation::ValidationResult;
use serde_json::Value as JsonValue;

pub const MIN_PRODUCT_LENGTH: usize = 2;
pub const MAX_PRODUCT_LENGTH: usize = 100;
pub const MIN_QUANTITY: f64 = 1.0;
pub const MAX_QUANTITY: f64 = 10_000.0;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Contract shared by both validation tiers.
pub trait OrderPolicy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Checks every field and collects all violations.
    fn validate(&self, input: &OrderInput) -> ValidationResult;
}

/// Permissive store-level rules: required fields, right JSON types,
/// non-negative numbers, integral quantity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOrderPolicy;

impl OrderPolicy for ServerOrderPolicy {
    fn name(&self) -> &'static str {
        "server"
    }

    fn validate(&self, input: &OrderInput) -> ValidationResult {
        let mut errors = Vec::new();

        let product_ok = input
            .product
            .as_ref()
            .and_then(JsonValue::as_str)
            .is_some_and(|p| !p.trim().is_empty());
        if !product_ok {
            errors.push("Product is required and must be a non-empty string".to_string());
        }

        let qty_ok = number(&input.qty).is_some_and(|q| q >= 0.0 && q.fract() == 0.0);
        if !qty_ok {
            errors.push("Quantity is required and must be a non-negative integer".to_string());
        }

        let price_ok = number(&input.price).is_some_and(|p| p >= 0.0);
        if !price_ok {
            errors.push("Price is required and must be a non-negative number".to_string());
        }

        ValidationResult::from_errors(errors)
    }
}

/// Strict pre-submission rules. Reports the first failing rule per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrderPolicy;

impl OrderPolicy for FormOrderPolicy {
    fn name(&self) -> &'static str {
        "form"
    }

    fn validate(&self, input: &OrderInput) -> ValidationResult {
        let mut errors = Vec::new();

        match input.product.as_ref().and_then(JsonValue::as_str).map(str::trim) {
            None | Some("") => errors.push("Product name is required".to_string()),
            Some(p) if p.chars().count() < MIN_PRODUCT_LENGTH => {
                errors.push("Product name must be at least 2 characters long".to_string())
            }
            Some(p) if p.chars().count() > MAX_PRODUCT_LENGTH => {
                errors.push("Product name cannot exceed 100 characters".to_string())
            }
            Some(_) => {}
        }

        match number(&input.qty) {
            None => errors.push("Quantity is required".to_string()),
            Some(q) if q.fract() != 0.0 => {
                errors.push("Quantity must be a whole number".to_string())
            }
            Some(q) if q < MIN_QUANTITY => errors.push("Quantity must be at least 1".to_string()),
            Some(q) if q > MAX_QUANTITY => {
                errors.push("Quantity cannot exceed 10,000".to_string())
            }
            Some(_) => {}
        }

        match number(&input.price) {
            None => errors.push("Price is required".to_string()),
            Some(p) if p < 0.0 => errors.push("Price cannot be negative".to_string()),
            Some(p) if p > MAX_PRICE => {
                errors.push("Price cannot exceed $1,000,000".to_string())
            }
            Some(p) if (p * 100.0).round() / 100.0 != p => {
                errors.push("Price cannot have more than 2 decimal places".to_string())
            }
            Some(_) => {}
        }

        ValidationResult::from_errors(errors)
    }
}

/// A JSON number as `f64`. Strings, booleans and null are not numbers.
fn number(value: &Option<JsonValue>) -> Option<f64> {
    value
        .as_ref()
        .filter(|v| v.is_number())
        .and_then(JsonValue::as_f64)
        .filter(|n| n.is_finite())
}
