use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use sqlx::postgres::PgConnectOptions;
use std::env;

use crate::constants::{
    DB_NAME, DB_USER, DEFAULT_DB_HOST, DEFAULT_DB_PASS, DEFAULT_REDIS_HOST, DEFAULT_REDIS_PASS,
    REDIS_PORT, SERVER_HOST, SERVER_PORT,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_pass: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Every variable has a literal default, so this only fails if the
    /// environment holds a value that cannot be used.
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let db_host = var_or("DB_HOST", DEFAULT_DB_HOST)?;
        let db_pass = var_or("DB_PASS", DEFAULT_DB_PASS)?;

        let redis_host = var_or("REDIS_HOST", DEFAULT_REDIS_HOST)?;
        let redis_pass = var_or("REDIS_PASS", DEFAULT_REDIS_PASS)?;

        Ok(Config {
            server_host: SERVER_HOST.to_string(),
            server_port: SERVER_PORT,
            db_host,
            db_user: DB_USER.to_string(),
            db_pass,
            db_name: DB_NAME.to_string(),
            redis_host,
            redis_port: REDIS_PORT,
            redis_pass,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Connection options for the Postgres user store
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .username(&self.db_user)
            .password(&self.db_pass)
            .database(&self.db_name)
    }

    /// Connection info for the Redis presence cache
    ///
    /// An empty password means the server has no auth, so no AUTH is sent.
    pub fn redis_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.redis_host.clone(), self.redis_port),
            redis: RedisConnectionInfo {
                db: 0,
                username: None,
                password: (!self.redis_pass.is_empty()).then(|| self.redis_pass.clone()),
            },
        }
    }
}

/// Read a variable verbatim, falling back to `default` when it is unset
fn var_or(name: &str, default: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(env::VarError::NotUnicode(_)) => Err(format!("{} is not valid unicode", name)),
    }
}
