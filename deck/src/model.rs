//! Document model: presentations, slides, elements and backgrounds.
//!
//! These types mirror the JSON document the Presto backend keeps in each
//! user's store. Field names follow that document exactly (`camelCase` for
//! slide and element fields, `default_background` on the presentation), and
//! fields the backend may omit fall back to the same defaults the editor
//! has always used. Unknown fields are ignored on read.
//!
//! Elements share one generic shape, [`Element<B>`], whose kind-specific
//! fields live in a flattened body (`TextBody`, `ImageBody`, `VideoBody`,
//! `CodeBody`). Each kind is kept in its own list on the [`Slide`].

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::code::CodeLanguage;
use crate::consts::DEFAULT_FONT_SIZE_EM;

pub type PresentationId = String;
pub type SlideId = String;
pub type ElementId = String;

/// Generate a fresh globally unique id (UUID v4, hyphenated).
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// GEOMETRY VALUES
// =============================================================================

/// Top-left corner of an element, in percent of the slide container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element extent, in percent of the slide container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// ELEMENTS
// =============================================================================

/// The four element kinds a slide can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Video,
    Code,
}

impl ElementKind {
    pub const ALL: [Self; 4] = [Self::Text, Self::Image, Self::Video, Self::Code];

    /// Short machine name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text box",
            Self::Image => "image",
            Self::Video => "video",
            Self::Code => "code block",
        };
        f.write_str(label)
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "textbox" | "text-box" => Ok(Self::Text),
            "image" | "img" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "code" | "codeblock" | "code-block" => Ok(Self::Code),
            other => Err(format!("unknown element kind: {other}")),
        }
    }
}

/// A positioned element on a slide. `B` carries the kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element<B> {
    pub id: ElementId,
    #[serde(flatten)]
    pub body: B,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub position: Position,
    /// Stacking order among all elements of the slide. Absent reads as 0,
    /// and 0 (not yet placed on a slide) is not written.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub z_index: i64,
}

impl<B> Element<B> {
    /// A new element at the slide origin with a fresh id. The z-index is
    /// assigned when the element is added to a slide.
    #[must_use]
    pub fn new(body: B, size: Size) -> Self {
        Self { id: new_id(), body, size, position: Position::ORIGIN, z_index: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBody {
    #[serde(default)]
    pub text: String,
    /// Font size in `em`.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_text_color")]
    pub color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBody {
    /// Image URL or `data:` URL.
    #[serde(default)]
    pub src: String,
    /// Alt text.
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBody {
    /// URL as typed by the user.
    #[serde(default)]
    pub url: String,
    /// 11-character YouTube id extracted from `url`.
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBody {
    #[serde(default)]
    pub content: String,
    /// Highlighter label, see [`CodeLanguage::label`].
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

pub type TextBox = Element<TextBody>;
pub type Image = Element<ImageBody>;
pub type Video = Element<VideoBody>;
pub type CodeBlock = Element<CodeBody>;

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE_EM
}

fn default_text_color() -> String {
    "black".to_owned()
}

fn default_font_family() -> String {
    "Arial".to_owned()
}

fn default_language() -> String {
    CodeLanguage::Plaintext.label().to_owned()
}

// =============================================================================
// BACKGROUND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Solid,
    Gradient,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: String,
    pub end: String,
    /// CSS gradient direction, e.g. `to right`.
    pub direction: String,
}

impl Default for Gradient {
    fn default() -> Self {
        Self { start: "#ffffff".to_owned(), end: "#000000".to_owned(), direction: "to right".to_owned() }
    }
}

/// Slide fill. All three payloads are stored; only the one matching `kind`
/// is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    #[serde(rename = "type", default)]
    pub kind: BackgroundKind,
    #[serde(default = "default_background_color")]
    pub color: String,
    #[serde(default)]
    pub gradient: Gradient,
    #[serde(default)]
    pub image: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Solid,
            color: default_background_color(),
            gradient: Gradient::default(),
            image: String::new(),
        }
    }
}

impl Background {
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self { kind: BackgroundKind::Solid, color: color.into(), ..Self::default() }
    }

    #[must_use]
    pub fn gradient(start: impl Into<String>, end: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            gradient: Gradient { start: start.into(), end: end.into(), direction: direction.into() },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self { kind: BackgroundKind::Image, image: url.into(), ..Self::default() }
    }
}

fn default_background_color() -> String {
    "#ffffff".to_owned()
}

// =============================================================================
// SLIDE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    /// Per-slide fill; falls back to the presentation default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_boxes: Vec<TextBox>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_blocks: Vec<CodeBlock>,
    /// Position assigned by the last explicit reorder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
}

impl Slide {
    /// An empty slide with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: new_id(),
            background: None,
            text_boxes: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            code_blocks: Vec::new(),
            order: None,
        }
    }

    /// The background actually painted for this slide.
    #[must_use]
    pub fn effective_background<'a>(&'a self, default: &'a Background) -> &'a Background {
        self.background.as_ref().unwrap_or(default)
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PRESENTATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: PresentationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Thumbnail URL or `data:` URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub default_background: Background,
    #[serde(default)]
    pub slides: Vec<Slide>,
    /// Optimistic concurrency counter, bumped on every successful save.
    /// Documents written before revisions existed read as 0.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub revision: u64,
}

impl Presentation {
    /// A new presentation with one empty slide and a white default background.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, thumbnail: Option<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            thumbnail,
            default_background: Background::default(),
            slides: vec![Slide::new()],
            revision: 0,
        }
    }
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
