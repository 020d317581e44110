//! API layer - HTTP endpoints and extractors

pub mod admin;
pub mod health;
pub mod middleware;
pub mod playground;
pub mod router;
pub mod state;
pub mod types;
pub mod validate;

pub use middleware::RequireValidKey;
pub use router::create_router;
pub use state::{ApiKeyServiceTrait, AppState};
