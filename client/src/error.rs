//! Error types for the client layer.
//!
//! ERROR HANDLING
//! ==============
//! `ValidationError` carries the exact user-facing text: its `Display` is
//! what the error banner shows. `ApiError` covers transport and backend
//! failures; auth flows surface the backend's own message, everything else
//! is logged. `EditorError` is what editor operations return.

use deck::{DeckError, PresentationId};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no authentication token found")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    /// Non-2xx response carrying the backend's `error` field.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// Non-2xx response without a usable error body.
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("presentation not found: {0}")]
    NotFound(PresentationId),
    /// The stored copy moved on since it was loaded; the save was not sent.
    #[error("presentation {id} was changed elsewhere (stored revision {stored}, editing revision {editing})")]
    Conflict { id: PresentationId, stored: u64, editing: u64 },
    #[error("token storage failed: {0}")]
    TokenStore(#[from] std::io::Error),
}

impl ApiError {
    /// The backend's own message, for flows that show it to the user.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Form validation failures. The message is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Width or Height is not between 0 and 100")]
    TextBoxSize,
    #[error("Width or Height must be between 0 and 100.")]
    ElementSize,
    #[error("X or Y must be between 0 and 100.")]
    ElementPosition,
    #[error("Please provide an image URL or upload a file.")]
    MissingImage,
    #[error("Please provide a YouTube video URL.")]
    MissingVideoUrl,
    #[error("Invalid YouTube URL.")]
    InvalidVideoUrl,
    #[error("Title cannot be empty.")]
    EmptyTitle,
    #[error("Presentation name is required.")]
    MissingPresentationName,
    #[error("Passwords do not match. Please re-enter your password and try again.")]
    PasswordMismatch,
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A keyboard or pointer action arrived while an overlay was open.
    #[error("ignored while a dialog is open")]
    OverlayOpen,
    #[error("slide container has not been measured")]
    Unmeasured,
}

/// Login, registration and logout failures. `Display` is the text shown
/// on the page.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl EditorError {
    /// Text for the error banner, for errors the user is meant to see.
    #[must_use]
    pub fn banner_message(&self) -> Option<String> {
        match self {
            Self::Validation(e) => Some(e.to_string()),
            Self::Deck(DeckError::LastSlide) => Some(DeckError::LastSlide.to_string()),
            _ => None,
        }
    }
}
