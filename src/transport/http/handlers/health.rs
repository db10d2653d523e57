use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (storage reachable)", body = HealthResponse),
        (status = 503, description = "Service is unhealthy (storage unreachable)", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.variant_service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    error: Some(format!("storage ping failed: {}", e)),
                }),
            )
        }
    }
}
