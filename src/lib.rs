//! tessera - layout and painting for character-grid user interfaces.
//!
//! A UI is a tree of [`Widget`](ui::core::widget::Widget)s that declare
//! `(min, max)` sizes on both axes. [`render::draw`] splits the screen between
//! them and lets each paint into a clipped
//! [`Surface`](ui::core::surface::Surface).
//!
//! Modules:
//! - ui::core: geometry, colors, the cell buffer, size negotiation, surfaces
//! - ui::widgets: Label, Blank, Tint, Row, Column, Grid
//! - ui::backend: the backend trait plus headless and terminal backends
//! - render: the root driver
//! - settings: draw settings stored as JSON
//! - tui: terminal lifecycle and a minimal event loop (feature `tui`)

pub mod render;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

pub use render::{draw, draw_with};
