//! Signup/signin backend
//!
//! User credentials live in Postgres; Redis records which usernames are
//! active. This module exports the core types and functions for testing and reuse.

pub mod cache;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod db;
pub mod error;
/// In-memory collaborators for the test-suite and local runs. The server binary
/// never constructs them.
pub mod memory;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use coordinator::{CredentialCoordinator, SigninOutcome};
pub use error::{AppError, Result};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<CredentialCoordinator>,
}

impl AppState {
    pub fn new(coordinator: CredentialCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}
