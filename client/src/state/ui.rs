//! Overlay state for dialogs and pickers.
//!
//! DESIGN
//! ======
//! At most one overlay is open at a time, so a single tagged value replaces
//! a set of independent open flags. Editing overlays name their target
//! element explicitly instead of relying on a separately stored selection.
//! While any overlay is open, slide navigation keys are ignored.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use deck::preview::NavKey;
use deck::{ElementId, ElementKind};

/// The dialog or picker currently shown over the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    AddElement(ElementKind),
    EditElement { kind: ElementKind, id: ElementId },
    EditTitle,
    EditThumbnail,
    BackgroundPicker,
    Rearrange,
    ConfirmDeletePresentation,
    NewPresentation,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    overlay: Overlay,
}

impl UiState {
    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay != Overlay::None
    }

    /// Show `overlay`, replacing whatever was open.
    pub fn open(&mut self, overlay: Overlay) {
        self.overlay = overlay;
    }

    /// Close the open overlay. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.overlay = Overlay::None;
        was_open
    }

    /// Route a key press. Escape closes the overlay; arrow keys pass
    /// through only when nothing is open.
    #[must_use]
    pub fn filter_key(&mut self, key: NavKey) -> Option<NavKey> {
        match key {
            NavKey::Escape => {
                self.close();
                None
            }
            NavKey::Left | NavKey::Right if self.is_open() => None,
            other => Some(other),
        }
    }
}
