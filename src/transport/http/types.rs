use crate::app::OrderService;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
}

impl AppState {
    pub fn new(order_service: OrderService) -> Self {
        Self {
            order_service: Arc::new(order_service),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message; validation messages are joined with ", ".
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    /// Always `OK` when the process is serving.
    pub status: String,
    /// Server time, ISO-8601 UTC with milliseconds.
    pub timestamp: String,
}

/// Message for a body that could not be decoded as JSON.
pub fn invalid_json_message(err: &JsonRejection, expected: &str) -> String {
    format!("Invalid JSON body: {} (expected: {})", err.body_text(), expected)
}
