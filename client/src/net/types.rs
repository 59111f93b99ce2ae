//! Wire DTOs for the Presto backend REST surface.
//!
//! DESIGN
//! ======
//! The backend keeps one JSON document per user, the "store". Reads return
//! `{store: {...}}` and writes replace it wholesale with the same envelope.
//! Keys this client does not know about are carried through `extra` so a
//! read-modify-write never drops them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use deck::Presentation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The per-user document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub presentations: Vec<Presentation>,
    /// Store-level thumbnail shown on the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Store {
    #[must_use]
    pub fn presentation(&self, id: &str) -> Option<&Presentation> {
        self.presentations.iter().find(|p| p.id == id)
    }
}

/// `{store: ...}` envelope used by both `GET /store` and `PUT /store`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreEnvelope {
    #[serde(default)]
    pub store: Store,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
