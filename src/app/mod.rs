pub mod database_service;
pub mod variant_service;
