pub mod pool;
pub mod tables;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::UserRecord;
use crate::store::UserStore;

pub use pool::create_pool;

/// Postgres-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(tables::CREATE_USERS)
            .execute(&self.pool)
            .await?;

        tracing::info!("Database initialized successfully");
        Ok(())
    }

    async fn insert_user(&self, username: &str, password: &str) -> Result<()> {
        sqlx::query(tables::INSERT_USER)
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(tables::SELECT_USER_BY_CREDENTIALS)
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(tables::PING).execute(&self.pool).await?;
        Ok(())
    }
}
