//! Add/edit forms for the four element kinds.
//!
//! `submit` builds a new element for the add dialog: size validated, placed
//! at the origin, fresh id. `edit_body` builds the replacement content for
//! the edit dialog; geometry and stacking stay with the existing element.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use deck::code::detect_language;
use deck::consts::{DEFAULT_ELEMENT_SIZE_PCT, DEFAULT_FONT_SIZE_EM};
use deck::media::youtube_video_id;
use deck::{CodeBlock, CodeBody, Element, Image, ImageBody, TextBody, TextBox, Video, VideoBody};

use super::checked_size;
use crate::error::ValidationError;

/// Spaces inserted when Tab is pressed in the code editor.
pub const TAB_SPACES: &str = "  ";

// =============================================================================
// TEXT
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TextBoxForm {
    pub text: String,
    pub font_size: f64,
    pub color: String,
    pub font_family: String,
    pub width: f64,
    pub height: f64,
}

impl Default for TextBoxForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE_EM,
            color: "black".to_owned(),
            font_family: "Arial".to_owned(),
            width: DEFAULT_ELEMENT_SIZE_PCT,
            height: DEFAULT_ELEMENT_SIZE_PCT,
        }
    }
}

impl TextBoxForm {
    /// Prefill from an existing text box for editing.
    #[must_use]
    pub fn from_element(text_box: &TextBox) -> Self {
        Self {
            text: text_box.body.text.clone(),
            font_size: text_box.body.font_size,
            color: text_box.body.color.clone(),
            font_family: text_box.body.font_family.clone(),
            width: text_box.size.width,
            height: text_box.size.height,
        }
    }

    /// # Errors
    ///
    /// `TextBoxSize` when width or height is outside 0–100.
    pub fn submit(&self) -> Result<TextBox, ValidationError> {
        let size = checked_size(self.width, self.height, ValidationError::TextBoxSize)?;
        Ok(Element::new(self.edit_body(), size))
    }

    #[must_use]
    pub fn edit_body(&self) -> TextBody {
        TextBody {
            text: self.text.clone(),
            font_size: self.font_size,
            color: self.color.clone(),
            font_family: self.font_family.clone(),
        }
    }
}

// =============================================================================
// IMAGE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ImageForm {
    pub url: String,
    /// `data:` URL of an uploaded file; wins over `url` when present.
    pub file_data: Option<String>,
    pub description: String,
    pub width: f64,
    pub height: f64,
}

impl Default for ImageForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            file_data: None,
            description: String::new(),
            width: DEFAULT_ELEMENT_SIZE_PCT,
            height: DEFAULT_ELEMENT_SIZE_PCT,
        }
    }
}

impl ImageForm {
    #[must_use]
    pub fn from_element(image: &Image) -> Self {
        Self {
            url: image.body.src.clone(),
            file_data: None,
            description: image.body.description.clone(),
            width: image.size.width,
            height: image.size.height,
        }
    }

    fn src(&self) -> Option<String> {
        match &self.file_data {
            Some(data) if !data.is_empty() => Some(data.clone()),
            _ => {
                let url = self.url.trim();
                if url.is_empty() { None } else { Some(url.to_owned()) }
            }
        }
    }

    /// # Errors
    ///
    /// `ElementSize` for a size outside 0–100, then `MissingImage` when
    /// neither a URL nor a file was given.
    pub fn submit(&self) -> Result<Image, ValidationError> {
        let size = checked_size(self.width, self.height, ValidationError::ElementSize)?;
        Ok(Element::new(self.edit_body()?, size))
    }

    /// # Errors
    ///
    /// `MissingImage` when neither a URL nor a file was given.
    pub fn edit_body(&self) -> Result<ImageBody, ValidationError> {
        let src = self.src().ok_or(ValidationError::MissingImage)?;
        Ok(ImageBody { src, description: self.description.clone() })
    }
}

// =============================================================================
// VIDEO
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct VideoForm {
    pub url: String,
    pub autoplay: bool,
    pub width: f64,
    pub height: f64,
}

impl Default for VideoForm {
    fn default() -> Self {
        Self { url: String::new(), autoplay: false, width: DEFAULT_ELEMENT_SIZE_PCT, height: DEFAULT_ELEMENT_SIZE_PCT }
    }
}

impl VideoForm {
    #[must_use]
    pub fn from_element(video: &Video) -> Self {
        Self {
            url: video.body.url.clone(),
            autoplay: video.body.autoplay,
            width: video.size.width,
            height: video.size.height,
        }
    }

    /// # Errors
    ///
    /// `ElementSize`, then `MissingVideoUrl`, then `InvalidVideoUrl`.
    pub fn submit(&self) -> Result<Video, ValidationError> {
        let size = checked_size(self.width, self.height, ValidationError::ElementSize)?;
        Ok(Element::new(self.edit_body()?, size))
    }

    /// Re-extracts the video id from the edited URL.
    ///
    /// # Errors
    ///
    /// `MissingVideoUrl` for a blank URL, `InvalidVideoUrl` when no id can
    /// be extracted.
    pub fn edit_body(&self) -> Result<VideoBody, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingVideoUrl);
        }
        let video_id = youtube_video_id(url).ok_or(ValidationError::InvalidVideoUrl)?;
        Ok(VideoBody { url: url.to_owned(), video_id: video_id.to_owned(), autoplay: self.autoplay })
    }
}

// =============================================================================
// CODE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct CodeForm {
    pub content: String,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CodeForm {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_size: DEFAULT_FONT_SIZE_EM,
            width: DEFAULT_ELEMENT_SIZE_PCT,
            height: DEFAULT_ELEMENT_SIZE_PCT,
        }
    }
}

impl CodeForm {
    #[must_use]
    pub fn from_element(block: &CodeBlock) -> Self {
        Self {
            content: block.body.content.clone(),
            font_size: block.body.font_size,
            width: block.size.width,
            height: block.size.height,
        }
    }

    /// # Errors
    ///
    /// `ElementSize` when width or height is outside 0–100.
    pub fn submit(&self) -> Result<CodeBlock, ValidationError> {
        let size = checked_size(self.width, self.height, ValidationError::ElementSize)?;
        Ok(Element::new(self.edit_body(), size))
    }

    /// Content with its language detected afresh.
    #[must_use]
    pub fn edit_body(&self) -> CodeBody {
        CodeBody {
            content: self.content.clone(),
            language: detect_language(&self.content).label().to_owned(),
            font_size: self.font_size,
        }
    }
}

/// Replace the selection `start..end` (char offsets) with two spaces.
/// Returns the new text and the caret position after the inserted spaces.
#[must_use]
pub fn insert_tab(text: &str, start: usize, end: usize) -> (String, usize) {
    let len = text.chars().count();
    let start = start.min(len);
    let end = end.clamp(start, len);
    let mut out: String = text.chars().take(start).collect();
    out.push_str(TAB_SPACES);
    out.extend(text.chars().skip(end));
    (out, start + TAB_SPACES.chars().count())
}
