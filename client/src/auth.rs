//! Sign-in, registration and sign-out.
//!
//! A successful login or registration stores the returned bearer token
//! and leads to the dashboard. A rejection shows the backend's own
//! message, or a generic one when the response carried none. Sign-out
//! needs a stored token, tells the backend, then forgets the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tracing::{error, info};

use crate::error::{ApiError, AuthError};
use crate::forms::{LoginForm, RegisterForm};
use crate::net::gateway::Gateway;
use crate::routes::Route;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

fn rejected(source: ApiError, fallback: &str) -> AuthError {
    let message = source.backend_message().unwrap_or(fallback).to_owned();
    error!(error = %source, "authentication request failed");
    AuthError::Rejected { message, source }
}

/// # Errors
///
/// `Rejected` with the text to show, or a token storage failure.
pub async fn login(gateway: &Gateway, form: &LoginForm) -> Result<Route, AuthError> {
    let request = form.request();
    let response = gateway.backend().login(&request).await.map_err(|e| rejected(e, LOGIN_FAILED))?;
    gateway.tokens().save(&response.token)?;
    info!(email = %request.email, "logged in");
    Ok(Route::Dashboard)
}

/// # Errors
///
/// `PasswordMismatch` before any request, `Rejected` with the text to
/// show, or a token storage failure.
pub async fn register(gateway: &Gateway, form: &RegisterForm) -> Result<Route, AuthError> {
    let request = form.request()?;
    let response = gateway.backend().register(&request).await.map_err(|e| rejected(e, REGISTER_FAILED))?;
    gateway.tokens().save(&response.token)?;
    info!(email = %request.email, "registered");
    Ok(Route::Dashboard)
}

/// Sign out and return to the landing page. The token is kept when the
/// backend call fails.
///
/// # Errors
///
/// `MissingToken` before any request, then transport, backend and token
/// storage failures.
pub async fn logout(gateway: &Gateway) -> Result<Route, AuthError> {
    let token = gateway.tokens().require()?;
    gateway
        .backend()
        .logout(&token)
        .await
        .inspect_err(|e| error!(error = %e, "error logging out"))?;
    gateway.tokens().clear()?;
    info!("logged out");
    Ok(Route::Landing)
}
