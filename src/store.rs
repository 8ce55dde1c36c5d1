//! Collaborator seams used by the credential coordinator.
//!
//! The durable store and the presence cache are independent systems with no
//! shared transaction; callers sequence them explicitly.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::UserRecord;

/// Durable store of user credentials
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the users table if it does not exist yet
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert a new user; fails if the username is already taken
    async fn insert_user(&self, username: &str, password: &str) -> Result<()>;

    /// Find the first user whose username and password both match exactly
    async fn find_by_credentials(&self, username: &str, password: &str)
        -> Result<Option<UserRecord>>;

    /// Round-trip to the store to check it is reachable
    async fn ping(&self) -> Result<()>;
}

/// Key-value cache recording which usernames are active
#[async_trait]
pub trait PresenceCache: Send + Sync {
    /// Record `username -> "active"`
    async fn mark_active(&self, username: &str) -> Result<()>;

    /// Round-trip to the cache to check it is reachable
    async fn ping(&self) -> Result<()>;
}
