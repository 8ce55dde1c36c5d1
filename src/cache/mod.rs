use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, ConnectionInfo};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::constants::PRESENCE_ACTIVE;
use crate::error::Result;
use crate::store::PresenceCache;

// Single connect attempt per call; commands are never retried
const RECONNECT_EXPONENT_BASE: u64 = 2;
const RECONNECT_FACTOR_MS: u64 = 100;
const RECONNECT_RETRIES: usize = 0;

/// Redis-backed presence cache
///
/// The shared connection is established on first use and reconnects on its
/// own afterwards, so a cache outage at startup only fails the calls made
/// while Redis is down.
#[derive(Clone)]
pub struct RedisPresenceCache {
    client: Client,
    manager: Arc<OnceCell<ConnectionManager>>,
}

impl RedisPresenceCache {
    pub fn open(info: ConnectionInfo) -> Result<Self> {
        let client = Client::open(info)?;
        Ok(Self {
            client,
            manager: Arc::new(OnceCell::new()),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| {
                ConnectionManager::new_with_backoff(
                    self.client.clone(),
                    RECONNECT_EXPONENT_BASE,
                    RECONNECT_FACTOR_MS,
                    RECONNECT_RETRIES,
                )
            })
            .await?;
        Ok(manager.clone())
    }
}

#[async_trait]
impl PresenceCache for RedisPresenceCache {
    async fn mark_active(&self, username: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(username, PRESENCE_ACTIVE).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Run against a live server with
    //! `TEST_REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored`

    use super::*;
    use redis::IntoConnectionInfo;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn test_cache() -> (RedisPresenceCache, Client) {
        let url = std::env::var("TEST_REDIS_URL").expect("TEST_REDIS_URL must be set");
        let info = url.into_connection_info().unwrap();
        let client = Client::open(info.clone()).unwrap();
        (RedisPresenceCache::open(info).unwrap(), client)
    }

    fn unique_key(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{}-{}", prefix, nanos)
    }

    #[tokio::test]
    #[ignore = "requires TEST_REDIS_URL"]
    async fn test_ping_live_server() {
        let (cache, _) = test_cache();
        cache.ping().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires TEST_REDIS_URL"]
    async fn test_mark_active_sets_value() {
        let (cache, client) = test_cache();
        let username = unique_key("presence");

        cache.mark_active(&username).await.unwrap();
        // the shared connection is reused across calls
        cache.mark_active(&username).await.unwrap();

        let mut conn = client.get_multiplexed_async_connection().await.unwrap();
        let value: Option<String> = conn.get(&username).await.unwrap();
        assert_eq!(value.as_deref(), Some("active"));
        let ttl: i64 = conn.ttl(&username).await.unwrap();
        assert_eq!(ttl, -1, "presence entries never expire");

        let _: () = conn.del(&username).await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_cache_error() {
        // nothing listens on port 1
        let info = "redis://127.0.0.1:1/".into_connection_info().unwrap();
        let cache = RedisPresenceCache::open(info).unwrap();

        let err = cache.ping().await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::Cache(_)));
        assert!(cache.mark_active("alice").await.is_err());
    }
}
