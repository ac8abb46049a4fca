use crate::transport::http::error::ApiError;
use axum::http::Uri;
use tracing::debug;

/// Fallback for every unmatched route.
pub async fn not_found_handler(uri: Uri) -> ApiError {
    debug!(%uri, "no route");
    ApiError::NotFound
}
