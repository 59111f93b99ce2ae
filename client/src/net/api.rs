//! REST transport for the Presto backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Backend`] is the seam between editor logic and the network. The
//! production implementation, [`HttpBackend`], speaks JSON over `reqwest`;
//! tests substitute an in-memory backend. Every authenticated call takes the
//! bearer token explicitly so a missing token is caught before any request
//! is built.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Backend`] carrying the body's
//! `error` field, or [`ApiError::Status`] when the body has none.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, Store, StoreEnvelope};
use crate::config::ClientConfig;
use crate::error::ApiError;

pub const REGISTER_PATH: &str = "/admin/auth/register";
pub const LOGIN_PATH: &str = "/admin/auth/login";
pub const LOGOUT_PATH: &str = "/admin/auth/logout";
pub const STORE_PATH: &str = "/store";

/// Backend REST operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// `POST /admin/auth/register`.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /admin/auth/login`.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /admin/auth/logout` with a bearer token.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// `GET /store`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx responses and malformed documents.
    async fn fetch_store(&self, token: &str) -> Result<Store, ApiError>;

    /// `PUT /store`, replacing the whole document.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    async fn put_store(&self, token: &str, store: &Store) -> Result<(), ApiError>;
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Map a failed response to an error, preferring the backend's message.
pub(crate) fn backend_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => ApiError::Backend { status, message: parsed.error },
        _ => ApiError::Status(status),
    }
}

// =============================================================================
// HTTP BACKEND
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `HttpClientBuild` if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.backend_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(backend_error(status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn post_json<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let text = self.send(self.http.post(endpoint(&self.base_url, path)).json(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(endpoint(&self.base_url, LOGOUT_PATH))
            .bearer_auth(token)
            .json(&serde_json::json!({}));
        self.send(request).await?;
        Ok(())
    }

    async fn fetch_store(&self, token: &str) -> Result<Store, ApiError> {
        let request = self.http.get(endpoint(&self.base_url, STORE_PATH)).bearer_auth(token);
        let text = self.send(request).await?;
        let envelope: StoreEnvelope = serde_json::from_str(&text)?;
        Ok(envelope.store)
    }

    async fn put_store(&self, token: &str, store: &Store) -> Result<(), ApiError> {
        let body = StoreEnvelope { store: store.clone() };
        let request = self.http.put(endpoint(&self.base_url, STORE_PATH)).bearer_auth(token).json(&body);
        self.send(request).await?;
        Ok(())
    }
}
