pub mod health;
pub mod signin;
pub mod signup;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use health::{health_check, root};
pub use signin::signin;
pub use signup::signup;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/signup", post(signup))
        .route("/api/signin", post(signin))
        .with_state(state)
}
