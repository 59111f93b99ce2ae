//! Shared numeric constants for the deck crate.

// ── Geometry ────────────────────────────────────────────────────

/// Pixels kept free between an element and the right/bottom container edge
/// when a drag or resize is committed.
pub const EDGE_MARGIN_PX: f64 = 5.0;

/// Minimum element width/height as a fraction of the container dimension.
pub const MIN_SIZE_RATIO: f64 = 0.01;

/// Percent coordinates span `0..=PERCENT_MAX`.
pub const PERCENT_MAX: f64 = 100.0;

// ── Element defaults ────────────────────────────────────────────

/// Default font size in `em` for text boxes and code blocks.
pub const DEFAULT_FONT_SIZE_EM: f64 = 1.0;

/// Default width/height in percent offered by the add-element forms.
pub const DEFAULT_ELEMENT_SIZE_PCT: f64 = 50.0;

// ── Preview ─────────────────────────────────────────────────────

/// Duration of the slide transition animation.
pub const TRANSITION_MS: u64 = 500;

/// Horizontal offset a slide enters from / exits to during a transition.
pub const TRANSITION_OFFSET_PX: f64 = 300.0;

// ── Media ───────────────────────────────────────────────────────

/// Length of a YouTube video id.
pub const YOUTUBE_ID_LEN: usize = 11;
