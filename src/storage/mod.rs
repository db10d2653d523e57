pub mod variants;

pub use variants::{InMemoryVariantStore, PostgresVariantStore, VariantGateway, VariantOrder};
