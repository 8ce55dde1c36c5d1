use axum::{extract::State, Form};

use crate::constants::MSG_INVALID_CREDENTIALS;
use crate::coordinator::SigninOutcome;
use crate::error::Result;
use crate::models::Credentials;
use crate::AppState;

/// Check a username/password pair
///
/// Wrong credentials are a normal 200 response; only store failures are
/// errors.
pub async fn signin(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<String> {
    let outcome = state
        .coordinator
        .signin(&form.username, &form.password)
        .await?;

    Ok(match outcome {
        SigninOutcome::Welcome => format!("Welcome back, {}!", form.username),
        SigninOutcome::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
    })
}
