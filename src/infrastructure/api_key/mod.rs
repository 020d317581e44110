//! API Key infrastructure implementations
//!
//! This module provides key generation and the key lifecycle service.

mod generator;
mod service;

pub use generator::{ApiKeyGenerator, RandomSource, SeededRandomSource, ThreadRandomSource};
pub use service::ApiKeyService;
