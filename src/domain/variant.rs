//! Variant storage rows and their wire representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `variants` table.
///
/// A variant belongs to at most one language tag and at most one country;
/// both links are nullable.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Variant {
    pub id: i32,
    pub language_id: Option<i32>,
    pub country_id: Option<i32>,
    pub variant_tag: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The variant as exposed over HTTP.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct VariantView {
    pub id: i32,
    /// Owning language tag, `0` when the variant is not attached to one.
    pub language_tag_id: i32,
    pub variant_tag: String,
    /// Empty when the stored description is null.
    pub description: String,
}

impl From<Variant> for VariantView {
    fn from(row: Variant) -> Self {
        Self {
            id: row.id,
            language_tag_id: row.language_id.unwrap_or_default(),
            variant_tag: row.variant_tag,
            description: row.description.unwrap_or_default(),
        }
    }
}

/// Maps storage rows to views, one for one, keeping storage order.
pub fn shape(rows: Vec<Variant>) -> Vec<VariantView> {
    rows.into_iter().map(VariantView::from).collect()
}

/// Paginated envelope returned by `GET /language-variant`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct VariantPage {
    pub variants: Vec<VariantView>,
    /// Offset of the next page. Omitted on what looks like the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl VariantPage {
    pub fn new(variants: Vec<VariantView>, next_page_token: Option<String>) -> Self {
        Self {
            variants,
            next_page_token,
        }
    }
}
