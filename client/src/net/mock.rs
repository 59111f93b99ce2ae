//! In-memory [`Backend`] for tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use deck::Presentation;

use super::api::Backend;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, Store};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Register(String),
    Login(String),
    Logout(String),
    Fetch(String),
    Put(String),
}

#[derive(Default)]
pub(crate) struct MockBackend {
    store: Mutex<Store>,
    calls: Mutex<Vec<Call>>,
    /// `(status, message)` returned by login/register instead of a token.
    auth_error: Option<(u16, String)>,
    fail_puts: bool,
    /// Apply PUTs but report them as failed, like a timed-out response.
    lose_put_responses: bool,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockBackend {
    pub(crate) fn with_presentations(presentations: Vec<Presentation>) -> Self {
        Self { store: Mutex::new(Store { presentations, ..Store::default() }), ..Self::default() }
    }

    pub(crate) fn failing_auth(status: u16, message: &str) -> Self {
        Self { auth_error: Some((status, message.to_owned())), ..Self::default() }
    }

    pub(crate) fn failing_puts(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    pub(crate) fn losing_put_responses(mut self) -> Self {
        self.lose_put_responses = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    pub(crate) fn put_count(&self) -> usize {
        lock(&self.calls).iter().filter(|c| matches!(c, Call::Put(_))).count()
    }

    pub(crate) fn store(&self) -> Store {
        lock(&self.store).clone()
    }

    pub(crate) fn stored(&self, id: &str) -> Option<Presentation> {
        lock(&self.store).presentation(id).cloned()
    }

    /// Simulate a save from another tab: replace and bump the revision.
    pub(crate) fn external_edit(&self, id: &str, edit: impl FnOnce(&mut Presentation)) {
        let mut store = lock(&self.store);
        if let Some(p) = store.presentations.iter_mut().find(|p| p.id == id) {
            edit(p);
            p.revision += 1;
        }
    }

    fn auth(&self, email: &str) -> Result<AuthResponse, ApiError> {
        match &self.auth_error {
            Some((status, message)) => Err(ApiError::Backend { status: *status, message: message.clone() }),
            None => Ok(AuthResponse { token: format!("token-for-{email}") }),
        }
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        lock(&self.calls).push(Call::Register(request.email.clone()));
        self.auth(&request.email)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        lock(&self.calls).push(Call::Login(request.email.clone()));
        self.auth(&request.email)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        lock(&self.calls).push(Call::Logout(token.to_owned()));
        Ok(())
    }

    async fn fetch_store(&self, token: &str) -> Result<Store, ApiError> {
        lock(&self.calls).push(Call::Fetch(token.to_owned()));
        Ok(self.store())
    }

    async fn put_store(&self, token: &str, store: &Store) -> Result<(), ApiError> {
        lock(&self.calls).push(Call::Put(token.to_owned()));
        if self.fail_puts {
            return Err(ApiError::Status(500));
        }
        *lock(&self.store) = store.clone();
        if self.lose_put_responses {
            return Err(ApiError::Status(504));
        }
        Ok(())
    }
}
