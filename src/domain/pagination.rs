//! Client page numbers and how they map onto `limit`/`offset`.

use crate::domain::validation::ValidationResult;

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const MAX_ITEMS_PER_PAGE: u32 = 100;
pub const MIN_PAGE: u32 = 1;

/// `offset = (page - 1) * page_size`. Page 0 is treated as the first page.
pub fn page_offset(page: u32, page_size: u32) -> u32 {
    page.max(MIN_PAGE).saturating_sub(1).saturating_mul(page_size)
}

/// Number of pages needed for `total` rows; 0 when there is nothing to show.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)).min(u64::from(u32::MAX)) as u32
}

pub fn validate_pagination(page: u32, total_pages: u32) -> ValidationResult {
    let mut errors = Vec::new();

    if page < MIN_PAGE {
        errors.push("Page number must be a positive integer".to_string());
    }
    if total_pages == 0 {
        errors.push("No pages available".to_string());
    } else if page > total_pages {
        errors.push("Page number exceeds total pages".to_string());
    }

    ValidationResult::from_errors(errors)
}
