//! Editor session for one presentation.
//!
//! DESIGN
//! ======
//! `Editor` owns the loaded presentation, the current slide index and the
//! page's transient UI (open overlay, error banner, measured slide
//! container). Every mutation takes `&mut self`, applies the change in
//! memory through the `deck` primitives and then persists the whole
//! presentation through the [`Gateway`]. Drag and resize stay local until
//! the stop event, which persists exactly once.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and the last-slide rejection go to the error banner
//! and leave the document untouched. Persistence failures are logged by the
//! gateway and returned; the in-memory edit is kept (no rollback), so the
//! next successful save carries it.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::time::Instant;

use deck::elements::{ElementBody, ElementPatch};
use deck::geometry::{Container, PixelRect, RenderState};
use deck::preview::{NavKey, Player};
use deck::render::{SlideScene, render_slide};
use deck::slides::{DragEnd, resolve_drag};
use deck::{DeckError, Element, ElementId, ElementKind, Presentation, PresentationId, Slide};
use tracing::{info, warn};

use crate::display::header_title;
use crate::error::{EditorError, ValidationError};
use crate::forms::{
    BackgroundForm, CodeForm, ImageForm, TextBoxForm, ThumbnailForm, TitleForm, VideoForm, checked_patch,
};
use crate::net::gateway::Gateway;
use crate::routes::Route;
use crate::state::banner::ErrorBanner;
use crate::state::ui::{Overlay, UiState};

/// Viewport width assumed until the host reports one.
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

pub struct Editor {
    gateway: Gateway,
    presentation: Presentation,
    current: usize,
    ui: UiState,
    banner: ErrorBanner,
    container: Container,
    viewport_width: f64,
}

impl Editor {
    /// Load presentation `id` and show slide `slide`, clamped into range.
    ///
    /// # Errors
    ///
    /// `NotFound` and the gateway's fetch errors.
    pub async fn open(gateway: Gateway, id: &str, slide: usize) -> Result<Self, EditorError> {
        let presentation = gateway.load(id).await?;
        Ok(Self::from_presentation(gateway, presentation, slide))
    }

    #[must_use]
    pub fn from_presentation(gateway: Gateway, presentation: Presentation, slide: usize) -> Self {
        let current = presentation.clamp_index(slide);
        Self {
            gateway,
            presentation,
            current,
            ui: UiState::default(),
            banner: ErrorBanner::default(),
            container: Container::new(0.0, 0.0),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn id(&self) -> &PresentationId {
        &self.presentation.id
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.presentation.slide(self.current)
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn banner_message(&self, now: Instant) -> Option<&str> {
        self.banner.message(now)
    }

    pub fn dismiss_banner(&mut self) {
        self.banner.dismiss();
    }

    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// Record the measured size of the slide container.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Presentation name shortened for the header.
    #[must_use]
    pub fn display_title(&self) -> String {
        header_title(&self.presentation.name, self.viewport_width)
    }

    /// `/presentation/:id?slide=N` for the current slide.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::Editor { id: self.presentation.id.clone(), slide: self.current }
    }

    /// Where the preview button leads.
    #[must_use]
    pub fn preview_route(&self) -> Route {
        Route::Preview { id: self.presentation.id.clone(), slide: self.current }
    }

    /// A slideshow player starting at the current slide.
    #[must_use]
    pub fn player(&self) -> Player {
        Player::new(self.presentation.slides.len(), self.current)
    }

    /// Layout of the current slide.
    ///
    /// # Errors
    ///
    /// `SlideOutOfRange` when the presentation has no slides.
    pub fn scene(&self) -> Result<SlideScene, DeckError> {
        render_slide(&self.presentation, self.current)
    }

    /// Pixel rect for an element on the measured container.
    #[must_use]
    pub fn element_rect(&self, kind: ElementKind, id: &str) -> Option<RenderState> {
        let slide = self.current_slide()?;
        Some(self.container.to_pixels(slide.placement(kind, id)?))
    }

    // =========================================================================
    // OVERLAYS
    // =========================================================================

    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.ui.open(overlay);
    }

    pub fn open_add(&mut self, kind: ElementKind) {
        self.ui.open(Overlay::AddElement(kind));
    }

    /// Open the edit dialog for an existing element (double click).
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the current slide has no such element.
    pub fn open_edit(&mut self, kind: ElementKind, id: &str) -> Result<(), EditorError> {
        let exists = self.current_slide().is_some_and(|s| s.placement(kind, id).is_some());
        if !exists {
            return Err(DeckError::ElementNotFound { kind, id: id.to_owned() }.into());
        }
        self.ui.open(Overlay::EditElement { kind, id: id.to_owned() });
        Ok(())
    }

    /// Open the slide rearrange dialog. It stays open across drags until
    /// closed.
    pub fn open_rearrange(&mut self) {
        self.ui.open(Overlay::Rearrange);
    }

    pub fn open_thumbnail(&mut self) {
        self.ui.open(Overlay::EditThumbnail);
    }

    pub fn close_overlay(&mut self) -> bool {
        self.ui.close()
    }

    /// Canvas pointer actions are blocked while a dialog covers the slide.
    fn ensure_canvas_free(&self) -> Result<(), EditorError> {
        if self.ui.is_open() { Err(EditorError::OverlayOpen) } else { Ok(()) }
    }

    /// Show a failed form on the banner. The document is not touched.
    fn validated<T>(&mut self, result: Result<T, ValidationError>, now: Instant) -> Result<T, EditorError> {
        result.map_err(|e| {
            warn!(presentation_id = %self.presentation.id, error = %e, "form rejected");
            self.banner.show(e.to_string(), now);
            EditorError::Validation(e)
        })
    }

    async fn persist(&mut self) -> Result<(), EditorError> {
        self.gateway.save(&mut self.presentation).await?;
        Ok(())
    }

    // =========================================================================
    // ELEMENTS
    // =========================================================================

    /// Append `element` to the current slide on top of everything else and
    /// persist. Returns the element's id.
    ///
    /// # Errors
    ///
    /// `SlideOutOfRange` without slides, then persistence errors.
    pub async fn add_element<B: ElementBody>(&mut self, element: Element<B>) -> Result<ElementId, EditorError> {
        let added = self.presentation.slide_mut(self.current)?.add(element);
        let (id, z_index) = (added.id.clone(), added.z_index);
        self.ui.close();
        info!(presentation_id = %self.presentation.id, slide = self.current, kind = %B::KIND, %id, z_index, "element added");
        self.persist().await?;
        Ok(id)
    }

    /// # Errors
    ///
    /// `TextBoxSize` (shown on the banner), then [`add_element`](Self::add_element) errors.
    pub async fn add_text(&mut self, form: &TextBoxForm, now: Instant) -> Result<ElementId, EditorError> {
        let element = self.validated(form.submit(), now)?;
        self.add_element(element).await
    }

    /// # Errors
    ///
    /// `ElementSize` or `MissingImage` (shown on the banner), then
    /// [`add_element`](Self::add_element) errors.
    pub async fn add_image(&mut self, form: &ImageForm, now: Instant) -> Result<ElementId, EditorError> {
        let element = self.validated(form.submit(), now)?;
        self.add_element(element).await
    }

    /// # Errors
    ///
    /// `ElementSize`, `MissingVideoUrl` or `InvalidVideoUrl` (shown on the
    /// banner), then [`add_element`](Self::add_element) errors.
    pub async fn add_video(&mut self, form: &VideoForm, now: Instant) -> Result<ElementId, EditorError> {
        let element = self.validated(form.submit(), now)?;
        self.add_element(element).await
    }

    /// # Errors
    ///
    /// `ElementSize` (shown on the banner), then [`add_element`](Self::add_element) errors.
    pub async fn add_code(&mut self, form: &CodeForm, now: Instant) -> Result<ElementId, EditorError> {
        let element = self.validated(form.submit(), now)?;
        self.add_element(element).await
    }

    /// Replace an element's content, keeping its geometry and z-index.
    ///
    /// # Errors
    ///
    /// `ElementNotFound`, then persistence errors.
    pub async fn replace_element<B: ElementBody>(&mut self, id: &str, body: B) -> Result<(), EditorError> {
        self.presentation.slide_mut(self.current)?.replace_body(id, body)?;
        self.ui.close();
        info!(presentation_id = %self.presentation.id, slide = self.current, kind = %B::KIND, %id, "element edited");
        self.persist().await
    }

    /// # Errors
    ///
    /// See [`replace_element`](Self::replace_element).
    pub async fn edit_text(&mut self, id: &str, form: &TextBoxForm) -> Result<(), EditorError> {
        self.replace_element(id, form.edit_body()).await
    }

    /// # Errors
    ///
    /// `MissingImage` (shown on the banner), then
    /// [`replace_element`](Self::replace_element) errors.
    pub async fn edit_image(&mut self, id: &str, form: &ImageForm, now: Instant) -> Result<(), EditorError> {
        let body = self.validated(form.edit_body(), now)?;
        self.replace_element(id, body).await
    }

    /// # Errors
    ///
    /// `MissingVideoUrl` or `InvalidVideoUrl` (shown on the banner), then
    /// [`replace_element`](Self::replace_element) errors.
    pub async fn edit_video(&mut self, id: &str, form: &VideoForm, now: Instant) -> Result<(), EditorError> {
        let body = self.validated(form.edit_body(), now)?;
        self.replace_element(id, body).await
    }

    /// # Errors
    ///
    /// See [`replace_element`](Self::replace_element).
    pub async fn edit_code(&mut self, id: &str, form: &CodeForm) -> Result<(), EditorError> {
        self.replace_element(id, form.edit_body()).await
    }

    /// Merge a percent geometry patch into an element and persist.
    ///
    /// # Errors
    ///
    /// `ElementPosition` or `ElementSize` (shown on the banner) when a
    /// coordinate falls outside `0..=100`, `ElementNotFound`, then
    /// persistence errors.
    pub async fn update_element(
        &mut self,
        kind: ElementKind,
        id: &str,
        patch: ElementPatch,
        now: Instant,
    ) -> Result<(), EditorError> {
        let patch = self.validated(checked_patch(patch), now)?;
        self.apply_patch(kind, id, patch).await
    }

    async fn apply_patch(&mut self, kind: ElementKind, id: &str, patch: ElementPatch) -> Result<(), EditorError> {
        self.presentation.slide_mut(self.current)?.patch(kind, id, patch)?;
        self.persist().await
    }

    /// # Errors
    ///
    /// `ElementNotFound`, then persistence errors.
    pub async fn remove_element(&mut self, kind: ElementKind, id: &str) -> Result<(), EditorError> {
        self.presentation.slide_mut(self.current)?.remove(kind, id)?;
        info!(presentation_id = %self.presentation.id, slide = self.current, %kind, %id, "element removed");
        self.persist().await
    }

    fn current_rect(&self, kind: ElementKind, id: &str) -> Result<PixelRect, EditorError> {
        match self.element_rect(kind, id) {
            Some(RenderState::Ready(rect)) => Ok(rect),
            Some(RenderState::Uninitialized) => Err(EditorError::Unmeasured),
            None => Err(DeckError::ElementNotFound { kind, id: id.to_owned() }.into()),
        }
    }

    /// Commit a drag that ended with the element's top-left at `(x, y)`
    /// pixels. Returns the clamped rect to display.
    ///
    /// # Errors
    ///
    /// `OverlayOpen` while a dialog is open, `Unmeasured` before the
    /// container has a size, `ElementNotFound`, then persistence errors.
    pub async fn drag_stop(&mut self, kind: ElementKind, id: &str, x: f64, y: f64) -> Result<PixelRect, EditorError> {
        self.ensure_canvas_free()?;
        let current = self.current_rect(kind, id)?;
        let (rect, placement) = self.container.drag_stop(current, x, y).ok_or(EditorError::Unmeasured)?;
        self.apply_patch(kind, id, ElementPatch { position: Some(placement.position), size: None }).await?;
        Ok(rect)
    }

    /// Commit a resize that ended at `rect` pixels. Returns the clamped
    /// rect to display.
    ///
    /// # Errors
    ///
    /// `OverlayOpen` while a dialog is open, `Unmeasured` before the
    /// container has a size, `ElementNotFound`, then persistence errors.
    pub async fn resize_stop(&mut self, kind: ElementKind, id: &str, rect: PixelRect) -> Result<PixelRect, EditorError> {
        self.ensure_canvas_free()?;
        self.current_rect(kind, id)?;
        let (rect, placement) = self.container.resize_stop(rect).ok_or(EditorError::Unmeasured)?;
        self.apply_patch(kind, id, placement.into()).await?;
        Ok(rect)
    }

    // =========================================================================
    // SLIDES
    // =========================================================================

    /// Append an empty slide and show it.
    ///
    /// # Errors
    ///
    /// Persistence errors.
    pub async fn create_slide(&mut self) -> Result<usize, EditorError> {
        self.current = self.presentation.create_slide();
        info!(presentation_id = %self.presentation.id, slide = self.current, "slide created");
        self.persist().await?;
        Ok(self.current)
    }

    /// Delete the current slide. The last remaining slide is refused with
    /// a banner message and nothing is saved.
    ///
    /// # Errors
    ///
    /// `LastSlide`, then persistence errors.
    pub async fn delete_slide(&mut self, now: Instant) -> Result<usize, EditorError> {
        match self.presentation.delete_slide(self.current) {
            Ok(next) => self.current = next,
            Err(e) => {
                warn!(presentation_id = %self.presentation.id, slide = self.current, error = %e, "slide delete refused");
                let err = EditorError::from(e);
                if let Some(message) = err.banner_message() {
                    self.banner.show(message, now);
                }
                return Err(err);
            }
        }
        info!(presentation_id = %self.presentation.id, slide = self.current, "slide deleted");
        self.persist().await?;
        Ok(self.current)
    }

    /// Keep showing the same slide after the list was reordered.
    fn follow_slide(&mut self, id: &str) {
        if let Some(index) = self.presentation.slide_index(id) {
            self.current = index;
        }
    }

    fn current_slide_id(&self) -> Option<String> {
        self.current_slide().map(|s| s.id.clone())
    }

    /// Replace the slide order with `ordered`, a permutation of the
    /// current slides.
    ///
    /// # Errors
    ///
    /// `NotAPermutation`, then persistence errors.
    pub async fn reorder(&mut self, ordered: Vec<Slide>) -> Result<(), EditorError> {
        let showing = self.current_slide_id();
        self.presentation.reorder(ordered)?;
        if let Some(id) = showing {
            self.follow_slide(&id);
        }
        info!(presentation_id = %self.presentation.id, "slides reordered");
        self.persist().await
    }

    /// # Errors
    ///
    /// `SlideOutOfRange`, then persistence errors.
    pub async fn move_slide(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let showing = self.current_slide_id();
        self.presentation.move_slide(from, to)?;
        if let Some(id) = showing {
            self.follow_slide(&id);
        }
        self.persist().await
    }

    /// Apply the end of a drag in the rearrange dialog. Dropping a slide on
    /// itself or outside any slide changes nothing and returns `false`.
    /// The dialog stays open.
    ///
    /// # Errors
    ///
    /// See [`reorder`](Self::reorder).
    pub async fn finish_drag(&mut self, drag: &DragEnd) -> Result<bool, EditorError> {
        match resolve_drag(&self.presentation.slides, drag) {
            Some(ordered) => {
                self.reorder(ordered).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show slide `index`, clamped into range. Returns whether it changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let next = self.presentation.clamp_index(index);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Arrow keys navigate; Escape closes the open overlay. Arrows are
    /// ignored while an overlay is open.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match self.ui.filter_key(key) {
            Some(NavKey::Left) => self.previous(),
            Some(NavKey::Right) => self.next(),
            _ => false,
        }
    }

    // =========================================================================
    // PRESENTATION
    // =========================================================================

    /// Apply the background picker to the current slide, or to the
    /// presentation default when its switch is set.
    ///
    /// # Errors
    ///
    /// `SlideOutOfRange` without slides, then persistence errors.
    pub async fn set_background(&mut self, form: &BackgroundForm) -> Result<(), EditorError> {
        let background = form.submit();
        if form.set_default {
            self.presentation.default_background = background;
        } else {
            self.presentation.slide_mut(self.current)?.background = Some(background);
        }
        self.ui.close();
        info!(presentation_id = %self.presentation.id, slide = self.current, default = form.set_default, "background set");
        self.persist().await
    }

    /// # Errors
    ///
    /// `EmptyTitle` (shown on the banner), then persistence errors.
    pub async fn rename(&mut self, form: &TitleForm, now: Instant) -> Result<(), EditorError> {
        let title = self.validated(form.submit(), now)?;
        self.presentation.name = title;
        self.ui.close();
        info!(presentation_id = %self.presentation.id, name = %self.presentation.name, "presentation renamed");
        self.persist().await
    }

    /// # Errors
    ///
    /// Persistence errors.
    pub async fn set_thumbnail(&mut self, form: &ThumbnailForm) -> Result<(), EditorError> {
        self.presentation.thumbnail = form.submit();
        self.ui.close();
        self.persist().await
    }

    /// Delete the whole presentation and return where to go next.
    ///
    /// # Errors
    ///
    /// Gateway errors; the presentation stays open.
    pub async fn delete_presentation(&mut self) -> Result<Route, EditorError> {
        self.gateway.delete(&self.presentation.id).await?;
        self.ui.close();
        Ok(Route::Dashboard)
    }
}
