//! Domain types for the language-variant listing: storage rows, wire views and
//! the offset pagination rules that connect them.

pub mod pagination;
pub mod variant;

pub use pagination::{ListError, PageRequest, DEFAULT_PAGE_SIZE};
pub use variant::{shape, Variant, VariantPage, VariantView};
