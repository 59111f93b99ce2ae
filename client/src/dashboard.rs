//! Dashboard: the signed-in user's presentations.
//!
//! Cards are derived from the loaded store on demand. Creating a
//! presentation validates the dialog, prepends the new document to the
//! stored list and refreshes the local copy from what was written.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Instant;

use deck::{Presentation, PresentationId};
use tracing::warn;

use crate::display::{CARD_DESCRIPTION_MAX, CARD_TITLE_MAX, card_aria_label, slide_count_label, truncate};
use crate::error::{ApiError, EditorError};
use crate::forms::NewPresentationForm;
use crate::net::gateway::Gateway;
use crate::routes::Route;
use crate::state::banner::ErrorBanner;
use crate::state::ui::{Overlay, UiState};

/// One presentation tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: PresentationId,
    pub title: String,
    /// Empty descriptions are not shown.
    pub description: Option<String>,
    pub slide_count: String,
    pub thumbnail: Option<String>,
    pub aria_label: String,
}

impl Card {
    #[must_use]
    pub fn for_presentation(presentation: &Presentation) -> Self {
        let slides = presentation.slides.len();
        Self {
            id: presentation.id.clone(),
            title: truncate(&presentation.name, CARD_TITLE_MAX),
            description: Some(&presentation.description)
                .filter(|d| !d.is_empty())
                .map(|d| truncate(d, CARD_DESCRIPTION_MAX)),
            slide_count: slide_count_label(slides),
            thumbnail: presentation.thumbnail.clone(),
            aria_label: card_aria_label(&presentation.name, &presentation.description, slides),
        }
    }
}

pub struct Dashboard {
    gateway: Gateway,
    presentations: Vec<Presentation>,
    thumbnail: Option<String>,
    ui: UiState,
    banner: ErrorBanner,
}

impl Dashboard {
    /// # Errors
    ///
    /// Gateway fetch errors, including `MissingToken` when signed out.
    pub async fn load(gateway: Gateway) -> Result<Self, ApiError> {
        let store = gateway.fetch().await?;
        Ok(Self {
            gateway,
            presentations: store.presentations,
            thumbnail: store.thumbnail,
            ui: UiState::default(),
            banner: ErrorBanner::default(),
        })
    }

    #[must_use]
    pub fn presentations(&self) -> &[Presentation] {
        &self.presentations
    }

    /// Store-level thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.presentations.iter().map(Card::for_presentation).collect()
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn banner_message(&self, now: Instant) -> Option<&str> {
        self.banner.message(now)
    }

    pub fn open_new(&mut self) {
        self.ui.open(Overlay::NewPresentation);
    }

    /// Create a presentation from the dialog and put it first.
    ///
    /// # Errors
    ///
    /// `MissingPresentationName` (shown on the banner), then gateway errors.
    pub async fn create(&mut self, form: &NewPresentationForm, now: Instant) -> Result<PresentationId, EditorError> {
        let presentation = form.submit().map_err(|e| {
            warn!(error = %e, "new presentation rejected");
            self.banner.show(e.to_string(), now);
            EditorError::Validation(e)
        })?;
        self.presentations = self.gateway.create(&presentation).await?;
        self.ui.close();
        Ok(presentation.id)
    }

    /// Editor route for a card, at the first slide.
    #[must_use]
    pub fn open(&self, id: &str) -> Route {
        Route::Editor { id: id.to_owned(), slide: 0 }
    }
}
