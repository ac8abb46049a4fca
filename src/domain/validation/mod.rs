//! Input validation and sanitization.
//!
//! Validators never fail: they return a [`ValidationResult`] carrying every
//! violation so callers can surface all of them at once.

pub mod filters;
pub mod policy;
pub mod search;

pub use filters::{validate_order_filters, OrderQueryParams};
pub use policy::{FormOrderPolicy, OrderPolicy, ServerOrderPolicy};
pub use search::validate_search_filter;

use crate::domain::error::OrderError;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Converts a failed result into [`OrderError::Validation`].
    pub fn into_result(self) -> Result<(), OrderError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(OrderError::Validation(self.errors))
        }
    }
}

/// Trims and collapses internal whitespace runs to a single space.
pub fn sanitize_string(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
