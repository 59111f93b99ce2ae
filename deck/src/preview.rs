//! Slideshow player: navigation state and slide transitions.
//!
//! The player only tracks which slide is showing and which way the last
//! move went. Moving is clamped at both ends; a move that would leave the
//! deck is refused and leaves the direction untouched.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::{TRANSITION_MS, TRANSITION_OFFSET_PX};
use crate::render::counter_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` forward, `-1` backward.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Horizontal slide plus fade between two slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Start offset of the incoming slide, px.
    pub enter_x: f64,
    /// End offset of the outgoing slide, px.
    pub exit_x: f64,
    pub from_opacity: f64,
    pub to_opacity: f64,
    pub duration_ms: u64,
}

impl Transition {
    #[must_use]
    pub fn for_direction(direction: Direction) -> Self {
        let sign = f64::from(direction.sign());
        Self {
            enter_x: sign * TRANSITION_OFFSET_PX,
            exit_x: -sign * TRANSITION_OFFSET_PX,
            from_opacity: 0.0,
            to_opacity: 1.0,
            duration_ms: TRANSITION_MS,
        }
    }
}

/// Keys the viewer and editor react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

impl NavKey {
    /// Map a DOM-style key name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowRight" | "Right" => Some(Self::Right),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    index: usize,
    len: usize,
    direction: Direction,
}

impl Player {
    /// A player over `len` slides starting at `start`, clamped into range.
    #[must_use]
    pub fn new(len: usize, start: usize) -> Self {
        Self { index: start.min(len.saturating_sub(1)), len, direction: Direction::Forward }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Advance one slide. Returns `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        self.direction = Direction::Forward;
        true
    }

    /// Go back one slide. Returns `false` at the first slide.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        self.direction = Direction::Backward;
        true
    }

    /// Jump to `index`, picking the direction from where the player was.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.len.saturating_sub(1));
        if target == self.index {
            return false;
        }
        self.direction = if target > self.index { Direction::Forward } else { Direction::Backward };
        self.index = target;
        true
    }

    /// Apply an arrow key. Returns whether the slide changed.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
            NavKey::Escape => false,
        }
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::for_direction(self.direction)
    }

    #[must_use]
    pub fn counter(&self) -> String {
        counter_label(self.index, self.len)
    }
}
