//! Rendering: row/cell rendering and pluggable host surfaces.
//!
//! This module provides:
//! - Per-cell rendering through column hooks (`rows`)
//! - The backend-agnostic `Surface` trait
//! - An in-memory HTML surface (all targets)
//! - A browser DOM surface (wasm32 only)

pub mod html;
pub mod markup;
pub mod rows;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use html::{BodyContent, HtmlSurface, StyleBlock};
pub use rows::{display_text, render_rows, RenderedCell, RenderedRow};
pub use surface::{classes, BodyHeight, Surface};

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
