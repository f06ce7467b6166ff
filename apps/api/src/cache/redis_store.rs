use async_trait::async_trait;
use redis::AsyncCommands;

use crate::cache::{CacheError, ProfileCache};
use crate::models::profile::ResumeProfile;

const KEY_PREFIX: &str = "resume:profile:";

/// Profiles stored as JSON strings with a TTL, shared across instances.
pub struct RedisProfileCache {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisProfileCache {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

fn redis_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

#[async_trait]
impl ProfileCache for RedisProfileCache {
    async fn get(&self, key: &str) -> Result<Option<ResumeProfile>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(redis_key(key)).await?;
        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, profile: &ResumeProfile) -> Result<(), CacheError> {
        let json = serde_json::to_string(profile)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(redis_key(key), json, self.ttl_secs)
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(redis_key("abc"), "resume:profile:abc");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_cache_error() {
        // Port 1 is never a Redis server; the connection attempt fails.
        let client = redis::Client::open("redis://127.0.0.1:1").unwrap();
        let cache = RedisProfileCache::new(client, 60);
        assert!(matches!(
            cache.get("k").await,
            Err(CacheError::Redis(_))
        ));
    }
}
