//! Local UI state shared by the editor and dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` tracks which overlay (dialog) is open, `banner` holds the transient
//! error message. Neither touches the document.

pub mod banner;
pub mod ui;
