//! Per-slide element store.
//!
//! A slide keeps one list per element kind. All mutations go through
//! [`Slide`] methods so the stacking rule holds everywhere: a new element
//! gets `1 + max(z_index)` over every element on the slide, across all four
//! kinds, so it always renders on top. Edits never touch `z_index` or `id`.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use crate::error::DeckError;
use crate::geometry::Placement;
use crate::model::{
    CodeBody, Element, ElementId, ElementKind, ImageBody, Position, Size, Slide, TextBody, VideoBody,
};

/// Links a body type to its kind and its list on the slide.
pub trait ElementBody: Sized {
    const KIND: ElementKind;

    fn list(slide: &Slide) -> &Vec<Element<Self>>;

    fn list_mut(slide: &mut Slide) -> &mut Vec<Element<Self>>;
}

impl ElementBody for TextBody {
    const KIND: ElementKind = ElementKind::Text;

    fn list(slide: &Slide) -> &Vec<Element<Self>> {
        &slide.text_boxes
    }

    fn list_mut(slide: &mut Slide) -> &mut Vec<Element<Self>> {
        &mut slide.text_boxes
    }
}

impl ElementBody for ImageBody {
    const KIND: ElementKind = ElementKind::Image;

    fn list(slide: &Slide) -> &Vec<Element<Self>> {
        &slide.images
    }

    fn list_mut(slide: &mut Slide) -> &mut Vec<Element<Self>> {
        &mut slide.images
    }
}

impl ElementBody for VideoBody {
    const KIND: ElementKind = ElementKind::Video;

    fn list(slide: &Slide) -> &Vec<Element<Self>> {
        &slide.videos
    }

    fn list_mut(slide: &mut Slide) -> &mut Vec<Element<Self>> {
        &mut slide.videos
    }
}

impl ElementBody for CodeBody {
    const KIND: ElementKind = ElementKind::Code;

    fn list(slide: &Slide) -> &Vec<Element<Self>> {
        &slide.code_blocks
    }

    fn list_mut(slide: &mut Slide) -> &mut Vec<Element<Self>> {
        &mut slide.code_blocks
    }
}

/// Sparse geometry update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
}

impl From<Placement> for ElementPatch {
    fn from(placement: Placement) -> Self {
        Self { position: Some(placement.position), size: Some(placement.size) }
    }
}

impl<B> Element<B> {
    fn apply(&mut self, patch: ElementPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
    }

    /// Stored geometry of this element.
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.size)
    }
}

fn patch_in<B>(list: &mut [Element<B>], id: &str, patch: ElementPatch) -> bool {
    match list.iter_mut().find(|e| e.id == id) {
        Some(element) => {
            element.apply(patch);
            true
        }
        None => false,
    }
}

fn remove_from<B>(list: &mut Vec<Element<B>>, id: &str) -> bool {
    let before = list.len();
    list.retain(|e| e.id != id);
    list.len() != before
}

fn placement_in<B>(list: &[Element<B>], id: &str) -> Option<Placement> {
    list.iter().find(|e| e.id == id).map(Element::placement)
}

impl Slide {
    /// Every element's z-index on this slide, all kinds together.
    pub fn z_indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.text_boxes
            .iter()
            .map(|e| e.z_index)
            .chain(self.images.iter().map(|e| e.z_index))
            .chain(self.videos.iter().map(|e| e.z_index))
            .chain(self.code_blocks.iter().map(|e| e.z_index))
    }

    /// Z-index the next added element receives.
    #[must_use]
    pub fn next_z_index(&self) -> i64 {
        self.z_indices().fold(0, i64::max) + 1
    }

    /// Total number of elements on the slide.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.text_boxes.len() + self.images.len() + self.videos.len() + self.code_blocks.len()
    }

    /// Append an element, assigning it the next z-index. An empty id is
    /// replaced with a fresh one.
    pub fn add<B: ElementBody>(&mut self, mut element: Element<B>) -> &Element<B> {
        if element.id.is_empty() {
            element.id = crate::model::new_id();
        }
        element.z_index = self.next_z_index();
        let list = B::list_mut(self);
        list.push(element);
        &list[list.len() - 1]
    }

    #[must_use]
    pub fn get<B: ElementBody>(&self, id: &str) -> Option<&Element<B>> {
        B::list(self).iter().find(|e| e.id == id)
    }

    /// Replace an element's content from an edit form. Geometry, `id` and
    /// `z_index` are kept.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no element of this kind has `id`.
    pub fn replace_body<B: ElementBody>(&mut self, id: &str, body: B) -> Result<&Element<B>, DeckError> {
        let element = B::list_mut(self)
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DeckError::ElementNotFound { kind: B::KIND, id: id.to_owned() })?;
        element.body = body;
        Ok(element)
    }

    /// Merge a geometry patch into the element of `kind` with `id`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no such element exists.
    pub fn patch(&mut self, kind: ElementKind, id: &str, patch: ElementPatch) -> Result<(), DeckError> {
        let found = match kind {
            ElementKind::Text => patch_in(&mut self.text_boxes, id, patch),
            ElementKind::Image => patch_in(&mut self.images, id, patch),
            ElementKind::Video => patch_in(&mut self.videos, id, patch),
            ElementKind::Code => patch_in(&mut self.code_blocks, id, patch),
        };
        if found { Ok(()) } else { Err(DeckError::ElementNotFound { kind, id: id.to_owned() }) }
    }

    /// Remove the element of `kind` with `id`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no such element exists.
    pub fn remove(&mut self, kind: ElementKind, id: &str) -> Result<(), DeckError> {
        let found = match kind {
            ElementKind::Text => remove_from(&mut self.text_boxes, id),
            ElementKind::Image => remove_from(&mut self.images, id),
            ElementKind::Video => remove_from(&mut self.videos, id),
            ElementKind::Code => remove_from(&mut self.code_blocks, id),
        };
        if found { Ok(()) } else { Err(DeckError::ElementNotFound { kind, id: id.to_owned() }) }
    }

    /// Stored geometry of the element of `kind` with `id`.
    #[must_use]
    pub fn placement(&self, kind: ElementKind, id: &str) -> Option<Placement> {
        match kind {
            ElementKind::Text => placement_in(&self.text_boxes, id),
            ElementKind::Image => placement_in(&self.images, id),
            ElementKind::Video => placement_in(&self.videos, id),
            ElementKind::Code => placement_in(&self.code_blocks, id),
        }
    }

    /// Ids of all elements of `kind`, in list order.
    #[must_use]
    pub fn element_ids(&self, kind: ElementKind) -> Vec<ElementId> {
        match kind {
            ElementKind::Text => self.text_boxes.iter().map(|e| e.id.clone()).collect(),
            ElementKind::Image => self.images.iter().map(|e| e.id.clone()).collect(),
            ElementKind::Video => self.videos.iter().map(|e| e.id.clone()).collect(),
            ElementKind::Code => self.code_blocks.iter().map(|e| e.id.clone()).collect(),
        }
    }
}
