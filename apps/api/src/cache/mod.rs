//! Profile memoization keyed by a digest of the normalized document.
//!
//! Backends implement `ProfileCache`; `AnalysisService` holds one as
//! `Arc<dyn ProfileCache>`. Cache failures are reported as `CacheError` and the
//! service downgrades them (a failed read is a miss, a failed write a warning).

pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

use crate::cache::memory::InMemoryProfileCache;
use crate::cache::redis_store::RedisProfileCache;
use crate::config::{CacheBackend, Config};
use crate::extraction::contact::SourceText;
use crate::models::profile::ResumeProfile;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cached profile could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cache lock poisoned")]
    Poisoned,
}

#[async_trait]
pub trait ProfileCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<ResumeProfile>, CacheError>;

    async fn put(&self, key: &str, profile: &ResumeProfile) -> Result<(), CacheError>;

    fn backend(&self) -> &'static str;
}

/// Hex SHA-256 over the normalized text, its lines and the positional name fallback.
///
/// Line breaks and the raw first line both shape the extracted profile but are
/// erased by normalization, so they are part of the key. Every value is tagged
/// and length-prefixed.
pub fn cache_key(source: &SourceText, name_fallback: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hash_field(&mut hasher, b"text", source.text.as_bytes());
    for line in &source.lines {
        hash_field(&mut hasher, b"line", line.as_bytes());
    }
    match name_fallback {
        Some(line) => hash_field(&mut hasher, b"fallback", line.as_bytes()),
        None => hasher.update(b"no-fallback"),
    }
    hex::encode(hasher.finalize())
}

fn hash_field(hasher: &mut Sha256, tag: &[u8], value: &[u8]) {
    hasher.update(tag);
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value);
}

/// Never stores anything. Used for `CACHE_BACKEND=none` and zero capacity.
pub struct NoopProfileCache;

#[async_trait]
impl ProfileCache for NoopProfileCache {
    async fn get(&self, _key: &str) -> Result<Option<ResumeProfile>, CacheError> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _profile: &ResumeProfile) -> Result<(), CacheError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}

pub fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn ProfileCache>> {
    let cache: Arc<dyn ProfileCache> = match config.cache_backend {
        CacheBackend::Memory if config.cache_capacity > 0 => {
            Arc::new(InMemoryProfileCache::new(config.cache_capacity))
        }
        CacheBackend::Memory | CacheBackend::None => Arc::new(NoopProfileCache),
        CacheBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when CACHE_BACKEND=redis")?;
            let client = redis::Client::open(url).context("REDIS_URL is not a valid Redis URL")?;
            Arc::new(RedisProfileCache::new(client, config.cache_ttl_secs))
        }
    };
    info!("Profile cache initialized (backend: {})", cache.backend());
    Ok(cache)
}
