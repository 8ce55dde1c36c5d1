/// Address the HTTP server binds to (all interfaces)
pub const SERVER_HOST: &str = "0.0.0.0";

/// Port the HTTP server listens on
pub const SERVER_PORT: u16 = 5000;

// =============================================================================
// Durable Store
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "postgres.data-ns.svc.cluster.local";
pub const DEFAULT_DB_PASS: &str = "securepass";
pub const DB_USER: &str = "postgres";
pub const DB_NAME: &str = "postgres";

// =============================================================================
// Presence Cache
// =============================================================================

pub const DEFAULT_REDIS_HOST: &str = "redis.data-ns.svc.cluster.local";
pub const DEFAULT_REDIS_PASS: &str = "securepass";
pub const REDIS_PORT: u16 = 6379;

/// Value written under a username once it has signed up
pub const PRESENCE_ACTIVE: &str = "active";

// =============================================================================
// Response Messages
// =============================================================================

pub const MSG_RUNNING: &str = "Backend is Running!";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials.";
