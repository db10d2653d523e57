use crate::domain::pagination::ListError;
use crate::domain::variant::VariantPage;
use crate::transport::http::types::{AppState, ListVariantsQuery};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

#[utoipa::path(
    get,
    path = "/language-variant",
    tag = "Language variants",
    params(ListVariantsQuery),
    responses(
        (status = 200, description = "One page of language tag variants", body = VariantPage),
        (status = 400, description = "Invalid languageTagId or page_token", body = String),
        (status = 500, description = "Database query error", body = String)
    )
)]
pub async fn list_variants_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = ListVariantsQuery::from_pairs(pairs);

    let result = state
        .variant_service
        .list(
            query.language_tag_id.as_deref(),
            query.page_size.as_deref(),
            query.page_token.as_deref(),
        )
        .await
        .and_then(|page| encode_page(&page));

    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, ?query, "invalid variant list request");
            } else {
                error!(error = ?e, "variant list request failed");
            }
            e.into_response()
        }
    }
}

fn encode_page(page: &VariantPage) -> Result<Vec<u8>, ListError> {
    serde_json::to_vec(page).map_err(ListError::EncodingFailure)
}
