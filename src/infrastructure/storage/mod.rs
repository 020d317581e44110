//! Storage infrastructure - API key store implementations

mod factory;
mod in_memory;
mod postgres;

pub use factory::create_store;
pub use in_memory::InMemoryApiKeyStore;
pub use postgres::{PostgresApiKeyStore, PostgresConfig};
