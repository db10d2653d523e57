use crate::domain::variant::{VariantPage, VariantView};
use crate::transport::http::handlers::{health, variants};
use crate::transport::http::types::{AppState, HealthResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthcheck_handler, variants::list_variants_handler),
    components(schemas(VariantPage, VariantView, HealthResponse)),
    tags((name = "Language variants", description = "Paginated language tag variants"))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/language-variant", get(variants::list_variants_handler))
        .with_state(app_state)
}
