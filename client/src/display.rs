//! Text shortening and labels for presentation titles and dashboard cards.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Editor header title length on wide screens.
pub const TITLE_MAX: usize = 30;
/// Editor header title length at or below [`MOBILE_MAX_WIDTH_PX`].
pub const TITLE_MAX_MOBILE: usize = 12;
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

pub const CARD_TITLE_MAX: usize = 21;
pub const CARD_DESCRIPTION_MAX: usize = 26;

/// Keep the first `max` characters and append `...` when `text` is longer.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

#[must_use]
pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH_PX
}

/// Title as shown in the editor header for a viewport of the given width.
#[must_use]
pub fn header_title(name: &str, viewport_width: f64) -> String {
    let max = if is_mobile(viewport_width) { TITLE_MAX_MOBILE } else { TITLE_MAX };
    truncate(name, max)
}

/// `1 Slide`, `3 Slides`.
#[must_use]
pub fn slide_count_label(count: usize) -> String {
    if count == 1 { "1 Slide".to_owned() } else { format!("{count} Slides") }
}

/// Screen reader label for a dashboard card. Uses the full name and
/// description.
#[must_use]
pub fn card_aria_label(name: &str, description: &str, slide_count: usize) -> String {
    let noun = if slide_count == 1 { "slide" } else { "slides" };
    format!("Open presentation titled {name} with description {description} containing {slide_count} {noun}")
}
