//! Offset pagination over the variant listing.
//!
//! Query parameters arrive as raw strings and are normalized here:
//! - `page_size` falls back to [`DEFAULT_PAGE_SIZE`] when missing, unparsable or not positive.
//! - `languageTagId` and `page_token` are hard errors when present but malformed.
//!
//! The continuation token is the offset of the next page and is only emitted when the
//! gateway returned a full page. A store holding an exact multiple of the page size
//! therefore costs the caller one extra, empty fetch to detect the end.

use crate::domain::variant::{shape, Variant, VariantPage};
use crate::storage::variants::VariantGateway;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Invalid languageTagId")]
    InvalidFilterId,
    #[error("Invalid page_token")]
    InvalidPageToken,
    #[error("Database query error")]
    StorageUnavailable(#[source] anyhow::Error),
    #[error("Failed to encode response")]
    EncodingFailure(#[source] serde_json::Error),
}

impl ListError {
    /// True for errors caused by the request itself rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ListError::InvalidFilterId | ListError::InvalidPageToken)
    }
}

/// Normalized list parameters. `page_size` is always positive and `offset` never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub language_tag_id: Option<i32>,
    pub page_size: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            language_tag_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl PageRequest {
    pub fn parse(
        filter_raw: Option<&str>,
        page_size_raw: Option<&str>,
        page_token_raw: Option<&str>,
    ) -> Result<Self, ListError> {
        let page_size = parse_page_size(page_size_raw);

        let language_tag_id = match non_empty(filter_raw) {
            None => None,
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| ListError::InvalidFilterId)?),
        };

        let offset = match non_empty(page_token_raw) {
            None => 0,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n >= 0 => n,
                _ => return Err(ListError::InvalidPageToken),
            },
        };

        Ok(Self {
            language_tag_id,
            page_size,
            offset,
        })
    }

    /// Token for the page after this one, given how many rows this page returned.
    pub fn next_page_token(&self, returned: usize) -> Option<String> {
        if i64::try_from(returned).ok()? != self.page_size {
            return None;
        }
        self.offset
            .checked_add(self.page_size)
            .map(|next| next.to_string())
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn parse_page_size(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(n) if n > 0 => n,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Runs the filtered query when a language tag filter is set, the unfiltered one otherwise.
pub async fn fetch_page(
    gateway: &dyn VariantGateway,
    request: &PageRequest,
) -> Result<Vec<Variant>, ListError> {
    let rows = match request.language_tag_id {
        Some(language_tag_id) => {
            gateway
                .list_filtered(language_tag_id, request.page_size, request.offset)
                .await
        }
        None => {
            gateway
                .list_unfiltered(request.page_size, request.offset)
                .await
        }
    };
    rows.map_err(ListError::StorageUnavailable)
}

/// Builds the response envelope for the rows fetched with `request`.
pub fn assemble(rows: Vec<Variant>, request: &PageRequest) -> VariantPage {
    let next_page_token = request.next_page_token(rows.len());
    VariantPage::new(shape(rows), next_page_token)
}
