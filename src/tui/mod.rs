//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `ui` so the layout engine builds without terminal crates.

pub mod terminal_guard;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use crate::render::draw_with;
use crate::settings::DrawSettings;
use crate::ui::backend::Backend;
use crate::ui::core::widget::Widget;

/// Draws `root` and keeps it on screen until a key is pressed, repainting on
/// every other event (resizes included).
pub fn show_until_key(
    backend: &mut dyn Backend,
    root: &dyn Widget,
    settings: &DrawSettings,
) -> io::Result<()> {
    loop {
        draw_with(backend, Some(root), settings)?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            Event::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "resize event");
            }
            _ => {}
        }
    }
}
