//! Persistence gateway over the whole-document store.
//!
//! DESIGN
//! ======
//! The backend only knows how to return and replace the entire store, so
//! every mutation is GET, merge, PUT. Saves are guarded by the
//! presentation's `revision`: if the stored copy's revision differs from
//! the one being edited, somebody else saved in between and the PUT is not
//! issued. A successful save bumps the revision on both copies.
//!
//! A PUT can reach the backend even though its response is lost (timeout,
//! dropped connection). When a PUT fails, the store is read back once; if
//! it already holds exactly what was sent, the save counts as done so the
//! local revision stays in step with the stored one.
//!
//! ERROR HANDLING
//! ==============
//! A missing token fails before any request. Every failure is logged here
//! with the presentation id; callers decide whether to surface it.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use deck::Presentation;
use tracing::{debug, error, info, warn};

use super::api::Backend;
use super::types::Store;
use crate::error::ApiError;
use crate::session::TokenStore;

#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn Backend>,
    tokens: Arc<dyn TokenStore>,
}

impl Gateway {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { backend, tokens }
    }

    #[must_use]
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Fetch the whole store.
    ///
    /// # Errors
    ///
    /// `MissingToken`, transport and backend errors.
    pub async fn fetch(&self) -> Result<Store, ApiError> {
        let token = self.tokens.require()?;
        self.backend.fetch_store(&token).await.inspect_err(|e| error!(error = %e, "error fetching store"))
    }

    /// Load one presentation by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when the store has no such presentation, plus the errors
    /// of [`fetch`](Self::fetch).
    pub async fn load(&self, id: &str) -> Result<Presentation, ApiError> {
        let store = self.fetch().await?;
        match store.presentation(id) {
            Some(found) => Ok(found.clone()),
            None => {
                error!(presentation_id = %id, "presentation not found");
                Err(ApiError::NotFound(id.to_owned()))
            }
        }
    }

    /// Merge `presentation` into the stored list by id and write the store.
    /// On success `presentation.revision` is incremented.
    ///
    /// # Errors
    ///
    /// `Conflict` when the stored revision moved on (nothing is written),
    /// `NotFound` when the presentation was deleted elsewhere, plus
    /// transport and backend errors.
    pub async fn save(&self, presentation: &mut Presentation) -> Result<(), ApiError> {
        let token = self.tokens.require()?;
        let mut store = self.backend.fetch_store(&token).await.inspect_err(|e| {
            error!(presentation_id = %presentation.id, error = %e, "error fetching store before save");
        })?;

        let Some(stored) = store.presentations.iter_mut().find(|p| p.id == presentation.id) else {
            error!(presentation_id = %presentation.id, "presentation not found in store; save skipped");
            return Err(ApiError::NotFound(presentation.id.clone()));
        };
        if stored.revision != presentation.revision {
            warn!(
                presentation_id = %presentation.id,
                stored = stored.revision,
                editing = presentation.revision,
                "presentation changed elsewhere; save skipped"
            );
            return Err(ApiError::Conflict {
                id: presentation.id.clone(),
                stored: stored.revision,
                editing: presentation.revision,
            });
        }

        let next_revision = presentation.revision + 1;
        let sent = Presentation { revision: next_revision, ..presentation.clone() };
        *stored = sent.clone();
        if let Err(e) = self.backend.put_store(&token, &store).await {
            error!(presentation_id = %presentation.id, error = %e, "error saving presentation");
            if !self.landed(&token, &sent).await {
                return Err(e);
            }
            warn!(
                presentation_id = %presentation.id,
                revision = next_revision,
                "save response lost but the store holds it"
            );
        }
        presentation.revision = next_revision;
        debug!(presentation_id = %presentation.id, revision = next_revision, "presentation saved");
        Ok(())
    }

    /// Whether the store already holds `sent` verbatim.
    async fn landed(&self, token: &str, sent: &Presentation) -> bool {
        match self.backend.fetch_store(token).await {
            Ok(store) => store.presentation(&sent.id) == Some(sent),
            Err(e) => {
                error!(presentation_id = %sent.id, error = %e, "error re-reading store after failed save");
                false
            }
        }
    }

    /// Prepend a new presentation to the stored list and return the list
    /// as written.
    ///
    /// # Errors
    ///
    /// `MissingToken`, transport and backend errors.
    pub async fn create(&self, presentation: &Presentation) -> Result<Vec<Presentation>, ApiError> {
        let token = self.tokens.require()?;
        let mut store = self.backend.fetch_store(&token).await?;
        store.presentations.insert(0, presentation.clone());
        self.backend.put_store(&token, &store).await.inspect_err(|e| {
            error!(presentation_id = %presentation.id, error = %e, "error creating presentation");
        })?;
        info!(presentation_id = %presentation.id, name = %presentation.name, "presentation created");
        Ok(store.presentations)
    }

    /// Remove a presentation from the stored list.
    ///
    /// # Errors
    ///
    /// `MissingToken`, transport and backend errors.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.tokens.require()?;
        let mut store = self.backend.fetch_store(&token).await?;
        store.presentations.retain(|p| p.id != id);
        self.backend.put_store(&token, &store).await.inspect_err(|e| {
            error!(presentation_id = %id, error = %e, "error deleting presentation");
        })?;
        info!(presentation_id = %id, "presentation deleted");
        Ok(())
    }
}
