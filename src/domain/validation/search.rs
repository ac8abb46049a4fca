//! Free-text search box validation.
//!
//! A minimal denylist. It keeps obvious markup out of the search term but is
//! not an XSS defense; output encoding is still the renderer's job.

use crate::domain::validation::ValidationResult;

pub const MAX_SEARCH_LENGTH: usize = 100;

const REJECTED_CHARS: &[char] = &['<', '>', '\'', '"', '&'];

pub fn validate_search_filter(filter: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if filter.chars().count() > MAX_SEARCH_LENGTH {
        errors.push("Search term cannot exceed 100 characters".to_string());
    }
    if filter.contains(REJECTED_CHARS) {
        errors.push("Search term contains invalid characters".to_string());
    }

    ValidationResult::from_errors(errors)
}
