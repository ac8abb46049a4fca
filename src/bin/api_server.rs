// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use order_dashboard::infra::{config, logging};
use order_dashboard::transport;
use order_dashboard::{OrderService, SqliteOrderStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let database_url = config::database_url();
    let port = config::port()?;
    let bind_addr = config::bind_addr();
    info!(env = %config::app_env(), %database_url, port, "starting order dashboard API");

    // --- Store Initialization ---
    let store = SqliteOrderStore::connect(&database_url, config::db_max_connections()?).await?;
    info!("orders table ready");

    let app_state = transport::http::AppState::new(OrderService::new(Arc::new(store)));

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let swagger = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi());
    let app = transport::http::create_router(app_state)
        .merge(swagger)
        .layer(cors);

    let addr = format!("{}:{}", bind_addr, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);
    info!("health check: http://localhost:{}/api/health", port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!("server error: {}", e);
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping");
        }
    }

    Ok(())
}
