//! Optional memoization of normalized match results.
//!
//! Keys are UUIDv5 digests of `(backend, query, pool)`, so identical requests
//! against an unchanged pool hit the same entry. Cache failures are logged and
//! treated as misses; they never fail a request. A request whose key material
//! cannot be encoded is not cached at all.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::alumni::AlumniRecord;

const KEY_PREFIX: &str = "alumnilink:mentor-match";
const KEY_NAMESPACE: Uuid = Uuid::from_u128(0x6d1c_4f0e_9a7b_4b8e_a2c3_51f0_7e9d_2b44);

#[async_trait]
pub trait MatchCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Vec<AlumniRecord>>;
    async fn put(&self, key: &str, mentors: &[AlumniRecord]);
}

#[derive(Serialize)]
struct KeyMaterial<'a> {
    backend: &'a str,
    query: &'a str,
    pool: &'a [AlumniRecord],
}

/// Deterministic cache key for one matching request.
pub fn cache_key(backend: &str, query: &str, pool: &[AlumniRecord]) -> Option<String> {
    digest_key(&KeyMaterial {
        backend,
        query,
        pool,
    })
}

fn digest_key(material: &impl Serialize) -> Option<String> {
    match serde_json::to_vec(material) {
        Ok(bytes) => Some(format!("{KEY_PREFIX}:{}", Uuid::new_v5(&KEY_NAMESPACE, &bytes))),
        Err(e) => {
            warn!("Match cache key could not be encoded, skipping cache: {e}");
            None
        }
    }
}

/// Redis-backed `MatchCache`.
#[derive(Clone)]
pub struct RedisMatchCache {
    conn: ConnectionManager,
    ttl_secs: u64,
}

impl RedisMatchCache {
    pub async fn connect(redis_url: &str, ttl_secs: u64) -> redis::RedisResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Mentor match cache connected (ttl {ttl_secs}s)");
        Ok(Self { conn, ttl_secs })
    }
}

#[async_trait]
impl MatchCache for RedisMatchCache {
    async fn get(&self, key: &str) -> Option<Vec<AlumniRecord>> {
        let mut conn = self.conn.clone();
        let cached: Option<String> = match conn.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Match cache read failed: {e}");
                return None;
            }
        };

        match serde_json::from_str(&cached?) {
            Ok(mentors) => Some(mentors),
            Err(e) => {
                warn!("Discarding unreadable match cache entry {key}: {e}");
                None
            }
        }
    }

    async fn put(&self, key: &str, mentors: &[AlumniRecord]) {
        let payload = match serde_json::to_string(mentors) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Match cache encode failed: {e}");
                return;
            }
        };

        let mut conn = self.conn.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(key, payload, self.ttl_secs)
            .await
        {
            warn!("Match cache write failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::default_alumni;
    use std::collections::HashMap;

    #[test]
    fn test_key_is_deterministic() {
        let pool = default_alumni();
        assert_eq!(
            cache_key("llm", "cloud computing", &pool),
            cache_key("llm", "cloud computing", &pool)
        );
    }

    #[test]
    fn test_key_depends_on_query_pool_and_backend() {
        let pool = default_alumni();
        let base = cache_key("llm", "cloud computing", &pool);
        assert!(base.is_some());

        assert_ne!(base, cache_key("llm", "product management", &pool));
        assert_ne!(base, cache_key("keyword", "cloud computing", &pool));
        assert_ne!(base, cache_key("llm", "cloud computing", &pool[1..]));
    }

    #[test]
    fn test_key_is_prefixed() {
        let key = cache_key("llm", "q", &[]).unwrap();
        assert!(key.starts_with("alumnilink:mentor-match:"));
    }

    #[test]
    fn test_unencodable_material_has_no_key() {
        // JSON object keys must be strings.
        let material = HashMap::from([(vec![1u8], 1), (vec![2u8], 2)]);
        assert_eq!(digest_key(&material), None);
    }
}
