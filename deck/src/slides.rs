//! Slide collection: create, delete, reorder and drag resolution.
//!
//! DESIGN
//! ======
//! Slides are addressed by index for navigation and by id for drag and drop.
//! A reorder is validated as a permutation of the current slide ids before
//! anything is written, and it stamps `order = index` on every slide so the
//! persisted document carries the sequence explicitly.
//!
//! A presentation never drops below one slide.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

use std::collections::HashSet;

use crate::error::DeckError;
use crate::model::{Presentation, Slide, SlideId};

/// Move the item at `from` to `to`, shifting the items in between.
/// Out-of-range indices leave the list unchanged.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from < out.len() && to < out.len() {
        let item = out.remove(from);
        out.insert(to, item);
    }
    out
}

impl Presentation {
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// # Errors
    ///
    /// Returns `SlideOutOfRange` for an index past the end.
    pub fn slide_mut(&mut self, index: usize) -> Result<&mut Slide, DeckError> {
        let len = self.slides.len();
        self.slides.get_mut(index).ok_or(DeckError::SlideOutOfRange { index, len })
    }

    #[must_use]
    pub fn slide_index(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Clamp a requested index (for example from a `?slide=` parameter) to
    /// the slides that exist.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.slides.len().saturating_sub(1))
    }

    /// Append an empty slide and return its index.
    pub fn create_slide(&mut self) -> usize {
        self.slides.push(Slide::new());
        self.slides.len() - 1
    }

    /// Delete the slide at `index` and return the new current index.
    ///
    /// # Errors
    ///
    /// Returns `LastSlide` when only one slide remains, and
    /// `SlideOutOfRange` for an index past the end. Nothing is removed in
    /// either case.
    pub fn delete_slide(&mut self, index: usize) -> Result<usize, DeckError> {
        let len = self.slides.len();
        if len <= 1 {
            return Err(DeckError::LastSlide);
        }
        if index >= len {
            return Err(DeckError::SlideOutOfRange { index, len });
        }
        self.slides.remove(index);
        Ok(index.min(self.slides.len() - 1))
    }

    /// Move one slide and stamp the new order.
    ///
    /// # Errors
    ///
    /// Returns `SlideOutOfRange` if either index is past the end.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<(), DeckError> {
        let len = self.slides.len();
        for index in [from, to] {
            if index >= len {
                return Err(DeckError::SlideOutOfRange { index, len });
            }
        }
        let moved = array_move(&self.slides, from, to);
        self.reorder(moved)
    }

    /// Replace the slide list with a permutation of itself and set each
    /// slide's `order` to its new position.
    ///
    /// # Errors
    ///
    /// Returns `NotAPermutation` if `ordered` does not hold exactly the
    /// current slide ids.
    pub fn reorder(&mut self, mut ordered: Vec<Slide>) -> Result<(), DeckError> {
        if ordered.len() != self.slides.len() {
            return Err(DeckError::NotAPermutation);
        }
        let current: HashSet<&str> = self.slides.iter().map(|s| s.id.as_str()).collect();
        let mut seen = HashSet::new();
        for slide in &ordered {
            if !current.contains(slide.id.as_str()) || !seen.insert(slide.id.as_str()) {
                return Err(DeckError::NotAPermutation);
            }
        }
        for (index, slide) in ordered.iter_mut().enumerate() {
            slide.order = Some(index);
        }
        self.slides = ordered;
        Ok(())
    }
}

// =============================================================================
// DRAG AND DROP
// =============================================================================

/// End of a drag gesture over the slide list, by slide identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: SlideId,
    /// Slide under the pointer, if the drop landed on one.
    pub over: Option<SlideId>,
}

/// Compute the reordered slide list for a finished drag. Returns `None` when
/// the drop is a no-op: dropped on itself, outside the list, or on an id
/// that is not present.
#[must_use]
pub fn resolve_drag(slides: &[Slide], drag: &DragEnd) -> Option<Vec<Slide>> {
    let over = drag.over.as_deref()?;
    if over == drag.active {
        return None;
    }
    let from = slides.iter().position(|s| s.id == drag.active)?;
    let to = slides.iter().position(|s| s.id == over)?;
    Some(array_move(slides, from, to))
}

/// A slide thumbnail's centre in the sortable list, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTile {
    pub id: SlideId,
    pub center: (f64, f64),
}

/// Closest-centre collision: the tile whose centre is nearest the pointer.
#[must_use]
pub fn closest_center(tiles: &[SlideTile], pointer: (f64, f64)) -> Option<&SlideId> {
    let distance = |tile: &SlideTile| {
        let dx = tile.center.0 - pointer.0;
        let dy = tile.center.1 - pointer.1;
        dx * dx + dy * dy
    };
    tiles.iter().min_by(|a, b| distance(a).total_cmp(&distance(b))).map(|tile| &tile.id)
}
