use crate::domain::{Order, OrderInput, OrdersPage, Summary};
use crate::transport::http::handlers::{common, health, orders, summary};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        summary::summary_handler,
        orders::list_orders_handler,
        orders::create_order_handler
    ),
    components(schemas(
        Order,
        OrderInput,
        OrdersPage,
        Summary,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::healthcheck_handler))
        .route("/api/summary", get(summary::summary_handler))
        .route(
            "/api/orders",
            get(orders::list_orders_handler).post(orders::create_order_handler),
        )
        .fallback(common::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
