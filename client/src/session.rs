//! Bearer token storage.
//!
//! The token from login/register is kept between runs in a small file
//! (`ClientConfig::token_file`). Every authenticated action starts with
//! [`TokenStore::require`], which fails with `MissingToken` before any
//! request is built when the user is signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::error;

use crate::error::ApiError;

pub trait TokenStore: Send + Sync {
    /// # Errors
    ///
    /// Storage read failures. A missing token is `Ok(None)`.
    fn load(&self) -> Result<Option<String>, ApiError>;

    /// # Errors
    ///
    /// Storage write failures.
    fn save(&self, token: &str) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Storage write failures. Clearing an absent token succeeds.
    fn clear(&self) -> Result<(), ApiError>;

    /// The stored token, or `MissingToken` (logged) when signed out.
    ///
    /// # Errors
    ///
    /// `MissingToken`, or a storage read failure.
    fn require(&self) -> Result<String, ApiError> {
        match self.load()? {
            Some(token) => Ok(token),
            None => {
                error!("no authentication token found");
                Err(ApiError::MissingToken)
            }
        }
    }

    /// Whether a token is currently stored.
    fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

/// Token kept in a file, one line, no trailing newline.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ApiError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok(if token.is_empty() { None } else { Some(token.to_owned()) })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
