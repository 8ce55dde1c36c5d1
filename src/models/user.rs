use serde::Deserialize;

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Form fields posted to the signup and signin endpoints
///
/// Values are taken verbatim; length and charset limits are left to the
/// durable store.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
