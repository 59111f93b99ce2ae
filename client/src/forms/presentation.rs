//! Presentation-level forms: create, rename, thumbnail, background.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use deck::{Background, BackgroundKind, Gradient, Presentation};

use crate::error::ValidationError;

/// Dashboard "New Presentation" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPresentationForm {
    pub name: String,
    pub description: String,
    /// Thumbnail URL or `data:` URL.
    pub thumbnail: Option<String>,
}

impl NewPresentationForm {
    /// A new presentation with one empty slide and the default white
    /// background.
    ///
    /// # Errors
    ///
    /// `MissingPresentationName` for a blank name.
    pub fn submit(&self) -> Result<Presentation, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingPresentationName);
        }
        let thumbnail = self.thumbnail.clone().filter(|t| !t.is_empty());
        Ok(Presentation::new(self.name.clone(), self.description.clone(), thumbnail))
    }
}

/// Rename dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleForm {
    pub title: String,
}

impl TitleForm {
    /// # Errors
    ///
    /// `EmptyTitle` for a blank title.
    pub fn submit(&self) -> Result<String, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() { Err(ValidationError::EmptyTitle) } else { Ok(title.to_owned()) }
    }
}

/// Thumbnail dialog. An empty value clears the thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailForm {
    pub url: String,
    pub file_data: Option<String>,
}

impl ThumbnailForm {
    #[must_use]
    pub fn submit(&self) -> Option<String> {
        match &self.file_data {
            Some(data) if !data.is_empty() => Some(data.clone()),
            _ => Some(self.url.trim().to_owned()).filter(|u| !u.is_empty()),
        }
    }
}

/// Background picker. All three payloads are kept so switching the type
/// back and forth does not lose what was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundForm {
    pub kind: BackgroundKind,
    pub color: String,
    pub gradient: Gradient,
    pub image: String,
    /// Apply to the presentation default instead of the current slide.
    pub set_default: bool,
}

impl Default for BackgroundForm {
    fn default() -> Self {
        Self::from_background(&Background::default(), false)
    }
}

impl BackgroundForm {
    #[must_use]
    pub fn from_background(background: &Background, set_default: bool) -> Self {
        Self {
            kind: background.kind,
            color: background.color.clone(),
            gradient: background.gradient.clone(),
            image: background.image.clone(),
            set_default,
        }
    }

    #[must_use]
    pub fn submit(&self) -> Background {
        Background {
            kind: self.kind,
            color: self.color.clone(),
            gradient: self.gradient.clone(),
            image: self.image.trim().to_owned(),
        }
    }
}
