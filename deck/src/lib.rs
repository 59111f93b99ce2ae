//! Slide deck model for the Presto presentation editor.
//!
//! This crate is pure: no I/O, no clocks, no network. It owns the document
//! types that the backend stores, the percentage coordinate system used to
//! place elements on a slide, and the editing primitives (element store,
//! slide collection) that the `client` crate drives and persists.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Presentation, slide, element and background types |
//! | [`geometry`] | Pixel/percent conversion and drag/resize clamping |
//! | [`elements`] | Per-slide element store with z-index assignment |
//! | [`slides`] | Slide collection: create, delete, reorder, drag resolution |
//! | [`render`] | Read-only scene layout and HTML export |
//! | [`preview`] | Slideshow player: navigation and transitions |
//! | [`media`] | YouTube id extraction and embed URLs |
//! | [`code`] | Code block language detection |
//! | [`consts`] | Shared numeric constants |

pub mod code;
pub mod consts;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod media;
pub mod model;
pub mod preview;
pub mod render;
pub mod slides;

pub use error::DeckError;
pub use model::{
    Background, BackgroundKind, CodeBlock, CodeBody, Element, ElementId, ElementKind, Gradient, Image, ImageBody,
    Position, Presentation, PresentationId, Size, Slide, SlideId, TextBody, TextBox, Video, VideoBody,
};
