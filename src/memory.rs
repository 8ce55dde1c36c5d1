//! In-memory collaborators for tests and local runs without Postgres or Redis.
//!
//! Both can be switched "offline" to simulate an outage: every call then fails
//! with the same kind of error the real client would return.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::constants::PRESENCE_ACTIVE;
use crate::error::{AppError, Result};
use crate::models::UserRecord;
use crate::store::{PresenceCache, UserStore};

fn outage(what: &'static str) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::IoError, what))
}

/// Vec-backed user store enforcing username uniqueness
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<UserRecord>>,
    offline: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All rows with the given username
    pub async fn rows_for(&self, username: &str) -> Vec<UserRecord> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|row| row.username == username)
            .cloned()
            .collect()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ensure_schema(&self) -> Result<()> {
        self.check_online()
    }

    async fn insert_user(&self, username: &str, password: &str) -> Result<()> {
        self.check_online()?;

        let mut rows = self.rows.lock().await;
        if rows.iter().any(|row| row.username == username) {
            return Err(AppError::UserAlreadyExists(username.to_string()));
        }

        let id = rows.last().map_or(1, |row| row.id + 1);
        rows.push(UserRecord {
            id,
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>> {
        self.check_online()?;

        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|row| row.username == username && row.password == password)
            .cloned())
    }

    async fn ping(&self) -> Result<()> {
        self.check_online()
    }
}

/// HashMap-backed presence cache
#[derive(Default)]
pub struct MemoryPresenceCache {
    entries: Mutex<HashMap<String, String>>,
    offline: AtomicBool,
}

impl MemoryPresenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Write an entry directly, bypassing the coordinator
    pub async fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(outage("Connection refused").into());
        }
        Ok(())
    }
}

#[async_trait]
impl PresenceCache for MemoryPresenceCache {
    async fn mark_active(&self, username: &str) -> Result<()> {
        self.check_online()?;
        self.insert(username, PRESENCE_ACTIVE).await;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.check_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.insert_user("alice", "one").await.unwrap();

        let err = store.insert_user("alice", "two").await.unwrap_err();
        assert!(matches!(err, AppError::UserAlreadyExists(ref name) if name == "alice"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_assigns_increasing_ids() {
        let store = MemoryUserStore::new();
        store.insert_user("alice", "pw").await.unwrap();
        store.insert_user("bob", "pw").await.unwrap();

        assert_eq!(store.rows_for("alice").await[0].id, 1);
        assert_eq!(store.rows_for("bob").await[0].id, 2);
    }

    #[tokio::test]
    async fn test_store_offline_fails_every_call() {
        let store = MemoryUserStore::new();
        store.set_offline(true);

        assert!(matches!(
            store.insert_user("alice", "pw").await,
            Err(AppError::Database(_))
        ));
        assert!(store.find_by_credentials("alice", "pw").await.is_err());
        assert!(store.ping().await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_offline_writes_nothing() {
        let cache = MemoryPresenceCache::new();
        cache.set_offline(true);

        assert!(matches!(
            cache.mark_active("alice").await,
            Err(AppError::Cache(_))
        ));
        assert!(cache.is_empty().await);

        cache.set_offline(false);
        cache.mark_active("alice").await.unwrap();
        assert_eq!(cache.get("alice").await.as_deref(), Some("active"));
    }
}
