// src/bin/api_server.rs

use language_variant_admin::infra::logging;
use language_variant_admin::transport;
use language_variant_admin::{Config, DatabaseService, VariantService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;

    // --- Database Initialization ---
    let database = DatabaseService::connect(&config).await?;
    if config.run_migrations {
        database.migrate().await?;
    } else if !database.schema_ready().await? {
        error!("variants table is missing and RUN_MIGRATIONS=false; requests will fail");
    }

    // --- Service Initialization ---
    let store = database.variant_store(config.variant_order);
    let variant_service =
        VariantService::new(Arc::new(store)).with_query_timeout(config.query_timeout);
    info!(
        order = %config.variant_order,
        query_timeout = ?config.query_timeout,
        "variant service initialized"
    );

    let app_state = transport::http::AppState {
        variant_service: Arc::new(variant_service),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "API server listening");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.pool().close().await;
    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
