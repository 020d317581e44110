//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, KeySettings, LogFormat, LoggingConfig, ServerConfig, StorageBackend,
    StorageSettings,
};
