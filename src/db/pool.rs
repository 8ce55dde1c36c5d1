use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::time::Duration;

/// Create a PostgreSQL connection pool
///
/// Connections are opened on first use, so an unreachable database does not
/// prevent the server from starting.
pub fn create_pool(options: PgConnectOptions) -> PgPool {
    tracing::info!("Creating database connection pool...");

    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy_with(options)
}
