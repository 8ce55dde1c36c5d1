/// Users table: id (serial) -> username (unique) + password
///
/// Idempotent, safe to run on every startup.
pub const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    username VARCHAR(50) UNIQUE, \
    password VARCHAR(50))";

pub const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES ($1, $2)";

/// Exact match on both columns; the first row wins
pub const SELECT_USER_BY_CREDENTIALS: &str =
    "SELECT id, username, password FROM users WHERE username = $1 AND password = $2";

pub const PING: &str = "SELECT 1";
