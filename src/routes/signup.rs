use axum::{extract::State, Form};

use crate::error::Result;
use crate::models::Credentials;
use crate::AppState;

/// Register a new user
///
/// Saves the credentials to the database, then marks the username active in
/// the cache. Any failure, including a taken username or a cache outage after
/// the row was saved, is a 500.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<String> {
    state
        .coordinator
        .signup(&form.username, &form.password)
        .await?;

    Ok(format!(
        "User {} Signed Up! (Saved to DB in data-ns & Redis)",
        form.username
    ))
}
