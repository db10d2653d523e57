pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use app::variant_service::VariantService;
pub use domain::{ListError, PageRequest, Variant, VariantPage, VariantView};
pub use infra::config::Config;
pub use storage::{InMemoryVariantStore, PostgresVariantStore, VariantGateway, VariantOrder};
