pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod variants;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
