use crate::domain::validation::OrderQueryParams;
use crate::domain::{Order, OrderInput, OrdersPage};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{invalid_json_message, AppState};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderQueryParams),
    responses(
        (status = 200, description = "Filtered page of orders, newest first", body = OrdersPage),
        (
            status = 400,
            description = "Invalid limit/offset",
            body = crate::transport::http::types::ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = crate::transport::http::types::ErrorResponse
        )
    )
)]
pub async fn list_orders_handler(
    State(state): State<AppState>,
    params: Result<Query<OrderQueryParams>, QueryRejection>,
) -> Result<Json<OrdersPage>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let page = state.order_service.list_orders(&params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderInput,
    responses(
        (status = 201, description = "Order created", body = Order),
        (
            status = 400,
            description = "Validation failed",
            body = crate::transport::http::types::ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = crate::transport::http::types::ErrorResponse
        )
    )
)]
pub async fn create_order_handler(
    State(state): State<AppState>,
    request: Result<Json<OrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(input) = request.map_err(|e| {
        ApiError::BadRequest(invalid_json_message(&e, r#"{"product", "qty", "price"}"#))
    })?;

    let order = state.order_service.create_order(&input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
