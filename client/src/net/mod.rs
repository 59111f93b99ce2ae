//! Networking: REST transport and the whole-document persistence gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `gateway` turns editor saves into
//! read-modify-write cycles on the store document, and `types` defines the
//! wire schema.

pub mod api;
pub mod gateway;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
