//! Infrastructure layer - key generation, the lifecycle service, stores and logging

pub mod api_key;
pub mod logging;
pub mod storage;
