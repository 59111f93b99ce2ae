//! Percent/pixel coordinate conversion for slide elements.
//!
//! Elements are stored in percent of the slide container so they keep their
//! proportions when the container is resized. Interaction happens in pixels:
//! on mount the stored percentages are projected onto the measured container,
//! and when a drag or resize stops the pixel geometry is clamped inside the
//! container and converted back.
//!
//! A container with a zero dimension has not been measured yet. Nothing is
//! divided by it; elements stay [`RenderState::Uninitialized`] until a real
//! measurement arrives.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{EDGE_MARGIN_PX, MIN_SIZE_RATIO, PERCENT_MAX};
use crate::model::{Position, Size};

/// Convert a pixel length to percent of `container_px`.
/// Returns `None` for an unmeasured (non-positive) container.
#[must_use]
pub fn to_percent(px: f64, container_px: f64) -> Option<f64> {
    if container_px > 0.0 {
        Some(px / container_px * PERCENT_MAX)
    } else {
        None
    }
}

/// Convert a percent length back to pixels of `container_px`.
#[must_use]
pub fn from_percent(percent: f64, container_px: f64) -> f64 {
    percent / PERCENT_MAX * container_px
}

/// Stored element geometry: percent position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub position: Position,
    pub size: Size,
}

impl Placement {
    #[must_use]
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }
}

/// Element geometry in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Rendered pixel dimensions of the slide container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

/// Whether an element can be laid out yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderState {
    /// The container has not been measured; render nothing.
    Uninitialized,
    Ready(PixelRect),
}

impl Container {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are positive, so conversions are defined.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Project stored percentages onto this container.
    #[must_use]
    pub fn to_pixels(&self, placement: Placement) -> RenderState {
        if !self.is_measured() {
            return RenderState::Uninitialized;
        }
        RenderState::Ready(PixelRect {
            x: from_percent(placement.position.x, self.width),
            y: from_percent(placement.position.y, self.height),
            width: from_percent(placement.size.width, self.width),
            height: from_percent(placement.size.height, self.height),
        })
    }

    /// Convert pixel geometry to percentages of this container.
    #[must_use]
    pub fn to_placement(&self, rect: PixelRect) -> Option<Placement> {
        Some(Placement {
            position: Position { x: to_percent(rect.x, self.width)?, y: to_percent(rect.y, self.height)? },
            size: Size { width: to_percent(rect.width, self.width)?, height: to_percent(rect.height, self.height)? },
        })
    }

    /// Smallest width/height an element may be resized to, in pixels.
    #[must_use]
    pub fn min_size(&self) -> (f64, f64) {
        (self.width * MIN_SIZE_RATIO, self.height * MIN_SIZE_RATIO)
    }

    /// Clamp a dropped element so it stays inside the container, keeping
    /// [`EDGE_MARGIN_PX`] free on the right and bottom.
    #[must_use]
    pub fn clamp_drag(&self, rect: PixelRect) -> PixelRect {
        let max_x = self.width - rect.width - EDGE_MARGIN_PX;
        let max_y = self.height - rect.height - EDGE_MARGIN_PX;
        PixelRect { x: rect.x.min(max_x).max(0.0), y: rect.y.min(max_y).max(0.0), ..rect }
    }

    /// Clamp a resized element inside the container. The origin is pulled
    /// in first so a minimum-size element still fits, then the far edges
    /// are limited to the container.
    #[must_use]
    pub fn clamp_resize(&self, rect: PixelRect) -> PixelRect {
        let (min_w, min_h) = self.min_size();
        let x = rect.x.min(self.width - min_w - EDGE_MARGIN_PX).max(0.0);
        let y = rect.y.min(self.height - min_h - EDGE_MARGIN_PX).max(0.0);
        let max_w = self.width - x - EDGE_MARGIN_PX;
        let max_h = self.height - y - EDGE_MARGIN_PX;
        PixelRect {
            x,
            y,
            width: rect.width.max(min_w).min(max_w).max(0.0),
            height: rect.height.max(min_h).min(max_h).max(0.0),
        }
    }

    /// Commit a drag: clamp the new top-left corner and return the pixel
    /// rect to display together with the percent geometry to store.
    #[must_use]
    pub fn drag_stop(&self, current: PixelRect, x: f64, y: f64) -> Option<(PixelRect, Placement)> {
        let rect = self.clamp_drag(PixelRect { x, y, ..current });
        Some((rect, self.to_placement(rect)?))
    }

    /// Commit a resize: clamp the new extent and return the pixel rect to
    /// display together with the percent geometry to store.
    #[must_use]
    pub fn resize_stop(&self, rect: PixelRect) -> Option<(PixelRect, Placement)> {
        let rect = self.clamp_resize(rect);
        Some((rect, self.to_placement(rect)?))
    }
}
