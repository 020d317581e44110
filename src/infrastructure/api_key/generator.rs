//! API key generation
//!
//! Keys are a fixed prefix followed by two independently drawn
//! lowercase-alphanumeric segments, e.g. `tvly-k3j9x0a1b2c3d` + `q8w7e6r5t4y3u`.

use std::fmt::Debug;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::KeySettings;
use crate::domain::DomainError;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Source of random lowercase-alphanumeric strings
pub trait RandomSource: Send + Sync + Debug {
    /// Produce a string of exactly `len` characters from `[a-z0-9]`
    fn alphanumeric(&self, len: usize) -> String;
}

/// Draws from the process-wide thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn alphanumeric(&self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        sample(&mut rng, len)
    }
}

/// Deterministic source for tests and reproducible fixtures
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn alphanumeric(&self, len: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        sample(&mut *rng, len)
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generator for API key secrets
#[derive(Debug)]
pub struct ApiKeyGenerator {
    prefix: String,
    segment_length: usize,
    source: Box<dyn RandomSource>,
}

impl ApiKeyGenerator {
    /// Default key prefix
    pub const DEFAULT_PREFIX: &'static str = "tvly-";
    /// Default length of each random segment
    pub const DEFAULT_SEGMENT_LENGTH: usize = 13;

    /// Create a generator using the thread RNG
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            segment_length: Self::DEFAULT_SEGMENT_LENGTH,
            source: Box::new(ThreadRandomSource),
        }
    }

    /// Set the length of each random segment
    pub fn with_segment_length(mut self, length: usize) -> Self {
        self.segment_length = length;
        self
    }

    /// Replace the random source
    pub fn with_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Build a generator from configured key settings
    ///
    /// An empty prefix or a zero segment length is a configuration error.
    pub fn from_settings(settings: &KeySettings) -> Result<Self, DomainError> {
        if settings.prefix.is_empty() {
            return Err(DomainError::configuration("keys.prefix must not be empty"));
        }
        if settings.segment_length == 0 {
            return Err(DomainError::configuration(
                "keys.segment_length must be greater than zero",
            ));
        }

        Ok(Self::new(settings.prefix.clone()).with_segment_length(settings.segment_length))
    }

    /// Generate a new key secret
    pub fn generate(&self) -> String {
        let first = self.source.alphanumeric(self.segment_length);
        let second = self.source.alphanumeric(self.segment_length);

        format!("{}{}{}", self.prefix, first, second)
    }

    /// Check that a key has this generator's prefix followed by two segments
    pub fn matches_format(&self, key: &str) -> bool {
        let Some(random) = key.strip_prefix(self.prefix.as_str()) else {
            return false;
        };

        random.len() == self.segment_length * 2
            && random
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }
}

impl Default for ApiKeyGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}
