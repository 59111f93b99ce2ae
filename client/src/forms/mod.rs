//! Dialog forms: field values plus the validation each dialog applies on
//! save.
//!
//! A form turns raw input into a document value or a [`ValidationError`]
//! whose text is shown in the error banner. Forms never touch the document
//! or the network; the editor and dashboard apply what they produce.

pub mod auth;
pub mod element;
pub mod presentation;

pub use auth::{LoginForm, RegisterForm};
pub use element::{CodeForm, ImageForm, TextBoxForm, VideoForm, insert_tab};
pub use presentation::{BackgroundForm, NewPresentationForm, ThumbnailForm, TitleForm};

use deck::Size;
use deck::consts::PERCENT_MAX;
use deck::elements::ElementPatch;

use crate::error::ValidationError;

fn in_range(value: f64) -> bool {
    (0.0..=PERCENT_MAX).contains(&value)
}

/// Both dimensions must lie in `0..=100` percent.
fn checked_size(width: f64, height: f64, error: ValidationError) -> Result<Size, ValidationError> {
    if in_range(width) && in_range(height) { Ok(Size::new(width, height)) } else { Err(error) }
}

/// A direct geometry edit: every present coordinate must lie in `0..=100`
/// percent.
///
/// # Errors
///
/// `ElementPosition` for an out-of-range position, `ElementSize` for an
/// out-of-range size.
pub fn checked_patch(patch: ElementPatch) -> Result<ElementPatch, ValidationError> {
    if let Some(position) = patch.position
        && !(in_range(position.x) && in_range(position.y))
    {
        return Err(ValidationError::ElementPosition);
    }
    if let Some(size) = patch.size {
        checked_size(size.width, size.height, ValidationError::ElementSize)?;
    }
    Ok(patch)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
