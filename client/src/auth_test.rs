use std::sync::Arc;

use super::*;
use crate::error::ValidationError;
use crate::net::mock::{Call, MockBackend};
use crate::session::{MemoryTokenStore, TokenStore};

fn signed_out(backend: &Arc<MockBackend>) -> (Gateway, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::default());
    (Gateway::new(backend.clone(), tokens.clone()), tokens)
}

fn login_form() -> LoginForm {
    LoginForm { email: " ada@example.com ".to_owned(), password: "pw".to_owned() }
}

fn register_form(confirm: &str) -> RegisterForm {
    RegisterForm {
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        password: "pw".to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[tokio::test]
async fn login_stores_token() {
    let backend = Arc::new(MockBackend::default());
    let (gateway, tokens) = signed_out(&backend);
    assert_eq!(login(&gateway, &login_form()).await.unwrap(), Route::Dashboard);
    assert_eq!(tokens.load().unwrap().as_deref(), Some("token-for-ada@example.com"));
    assert_eq!(backend.calls(), vec![Call::Login("ada@example.com".to_owned())]);
}

#[tokio::test]
async fn login_shows_backend_message() {
    let backend = Arc::new(MockBackend::failing_auth(400, "Invalid email or password"));
    let (gateway, tokens) = signed_out(&backend);
    let err = login(&gateway, &login_form()).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!tokens.is_authenticated());
}

#[tokio::test]
async fn register_checks_passwords_before_request() {
    let backend = Arc::new(MockBackend::default());
    let (gateway, _tokens) = signed_out(&backend);
    let err = register(&gateway, &register_form("other")).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(ValidationError::PasswordMismatch)));
    assert_eq!(err.to_string(), "Passwords do not match. Please re-enter your password and try again.");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn register_stores_token() {
    let backend = Arc::new(MockBackend::default());
    let (gateway, tokens) = signed_out(&backend);
    assert_eq!(register(&gateway, &register_form("pw")).await.unwrap(), Route::Dashboard);
    assert!(tokens.is_authenticated());
}

#[test]
fn rejection_without_message_uses_fallback() {
    assert_eq!(rejected(ApiError::Status(500), REGISTER_FAILED).to_string(), REGISTER_FAILED);
    assert_eq!(rejected(ApiError::MissingToken, LOGIN_FAILED).to_string(), LOGIN_FAILED);
}

#[tokio::test]
async fn logout_without_token_sends_nothing() {
    let backend = Arc::new(MockBackend::default());
    let (gateway, _tokens) = signed_out(&backend);
    let err = logout(&gateway).await.unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::MissingToken)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn logout_clears_token() {
    let backend = Arc::new(MockBackend::default());
    let tokens = Arc::new(MemoryTokenStore::with_token("tok"));
    let gateway = Gateway::new(backend.clone(), tokens.clone());
    assert_eq!(logout(&gateway).await.unwrap(), Route::Landing);
    assert!(!tokens.is_authenticated());
    assert_eq!(backend.calls(), vec![Call::Logout("tok".to_owned())]);
}
