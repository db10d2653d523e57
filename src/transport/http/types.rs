use crate::app::variant_service::VariantService;
use crate::domain::pagination::ListError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub variant_service: Arc<VariantService>,
}

/// Raw query string of `GET /language-variant`.
///
/// Values stay strings so that normalization (and its error reporting) happens in one
/// place, after extraction. A repeated key keeps its first value.
#[derive(Deserialize, Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListVariantsQuery {
    /// Only list variants owned by this language tag.
    #[serde(rename = "languageTagId")]
    #[param(value_type = Option<i32>)]
    pub language_tag_id: Option<String>,
    /// Rows per page. Missing, non-numeric or non-positive values mean 10.
    #[param(value_type = Option<i64>, default = 10)]
    pub page_size: Option<String>,
    /// Offset returned as `next_page_token` by the previous page.
    #[param(value_type = Option<i64>, default = 0)]
    pub page_token: Option<String>,
}

impl ListVariantsQuery {
    /// Picks the first value of each known key from decoded query pairs; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "languageTagId" => &mut query.language_tag_id,
                "page_size" => &mut query.page_size,
                "page_token" => &mut query.page_token,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListError::InvalidFilterId | ListError::InvalidPageToken => StatusCode::BAD_REQUEST,
            ListError::StorageUnavailable(_) | ListError::EncodingFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Errors go out as plain text, e.g. `400 Invalid page_token`.
impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
