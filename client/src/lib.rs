//! Presto client: editor sessions, dashboard and auth flows over the
//! backend's whole-document store.
//!
//! The document model and every pure editing primitive live in the `deck`
//! crate. This crate adds what touches the outside world: the REST
//! transport, the bearer token, the persistence gateway, and the
//! per-page sessions that validate forms, mutate the document and save it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Editor session: elements, slides, backgrounds, navigation |
//! | [`dashboard`] | Presentation list, cards and creation |
//! | [`auth`] | Login, registration and logout flows |
//! | [`forms`] | Dialog values and their validation |
//! | [`net`] | REST transport, wire types and the persistence gateway |
//! | [`session`] | Bearer token storage |
//! | [`state`] | Overlay and error banner state |
//! | [`routes`] | Client routes and the `slide` query parameter |
//! | [`display`] | Title truncation and card labels |
//! | [`media`] | `data:` URLs from local files |
//! | [`config`] | Environment-driven client configuration |
//! | [`error`] | Error types |

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod editor;
pub mod error;
pub mod forms;
pub mod media;
pub mod net;
pub mod routes;
pub mod session;
pub mod state;

pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use editor::Editor;
pub use error::{ApiError, AuthError, EditorError, ValidationError};
pub use net::api::{Backend, HttpBackend};
pub use net::gateway::Gateway;
pub use routes::Route;
pub use session::{FileTokenStore, TokenStore};
