use crate::domain::Summary;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Summary statistics over all orders", body = Summary),
        (
            status = 500,
            description = "Internal server error",
            body = crate::transport::http::types::ErrorResponse
        )
    )
)]
pub async fn summary_handler(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let summary = state.order_service.summary().await?;
    Ok(Json(summary))
}
