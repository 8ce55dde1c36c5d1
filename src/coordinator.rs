use serde::Serialize;
use std::sync::Arc;

use crate::cache::RedisPresenceCache;
use crate::config::Config;
use crate::db::{create_pool, PgUserStore};
use crate::error::Result;
use crate::store::{PresenceCache, UserStore};

/// Outcome of a signin attempt that reached the durable store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigninOutcome {
    Welcome,
    InvalidCredentials,
}

/// Reachability of a single collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    fn of(result: Result<()>, name: &str) -> Self {
        match result {
            Ok(()) => Connectivity::Connected,
            Err(e) => {
                tracing::error!("{} health check failed: {}", name, e);
                Connectivity::Disconnected
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database: Connectivity,
    pub cache: Connectivity,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.database == Connectivity::Connected && self.cache == Connectivity::Connected
    }
}

/// Sequences writes and reads across the durable store and the presence cache
///
/// The two collaborators share no transaction. Signup commits to the store
/// before touching the cache, and nothing is undone if the cache write fails.
#[derive(Clone)]
pub struct CredentialCoordinator {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn PresenceCache>,
}

impl CredentialCoordinator {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn PresenceCache>) -> Self {
        Self { store, cache }
    }

    /// Build the Postgres and Redis collaborators described by `config`
    ///
    /// Neither client connects here; the first network round-trip happens in
    /// [`initialize`](Self::initialize) or on the first request.
    pub fn connect(config: &Config) -> Result<Self> {
        let pool = create_pool(config.pg_connect_options());
        let cache = RedisPresenceCache::open(config.redis_connection_info())?;

        Ok(Self::new(Arc::new(PgUserStore::new(pool)), Arc::new(cache)))
    }

    /// One-off startup steps: create the users table and check the cache
    ///
    /// Failures are logged and the server keeps running degraded.
    pub async fn initialize(&self) {
        if let Err(e) = self.store.ensure_schema().await {
            tracing::error!("DB Init Error: {}", e);
        }

        match self.cache.ping().await {
            Ok(()) => tracing::info!("Connected to Redis"),
            Err(e) => tracing::error!("Failed to connect to Redis: {}", e),
        }
    }

    /// Insert the user, then mark them active in the cache
    ///
    /// A cache failure is returned to the caller even though the user row has
    /// already been committed.
    pub async fn signup(&self, username: &str, password: &str) -> Result<()> {
        self.store.insert_user(username, password).await?;
        tracing::info!("User {} saved to database", username);

        self.cache.mark_active(username).await?;
        tracing::debug!("User {} marked active", username);

        Ok(())
    }

    /// Check the credentials against the durable store only
    pub async fn signin(&self, username: &str, password: &str) -> Result<SigninOutcome> {
        match self.store.find_by_credentials(username, password).await? {
            Some(_) => Ok(SigninOutcome::Welcome),
            None => {
                tracing::info!("Rejected signin for {}", username);
                Ok(SigninOutcome::InvalidCredentials)
            }
        }
    }

    pub async fn health(&self) -> HealthReport {
        let (database, cache) = tokio::join!(self.store.ping(), self.cache.ping());

        HealthReport {
            database: Connectivity::of(database, "Database"),
            cache: Connectivity::of(cache, "Cache"),
        }
    }
}
