//! Root driver: one full repaint of a widget tree per call.

use std::io;

use crate::settings::DrawSettings;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::Widget;

/// Clears `backend`, paints `root` over the whole grid and flushes.
///
/// `None` paints nothing; the screen is still cleared and flushed.
pub fn draw(backend: &mut dyn Backend, root: Option<&dyn Widget>) -> io::Result<()> {
    draw_with(backend, root, &DrawSettings::default())
}

pub fn draw_with(
    backend: &mut dyn Backend,
    root: Option<&dyn Widget>,
    settings: &DrawSettings,
) -> io::Result<()> {
    backend.clear(settings.clear)?;
    if let Some(root) = root {
        let (w, h) = backend.size()?;
        tracing::trace!(width = w, height = h, "draw pass");
        let mut surface = Surface::new(backend.buffer_mut(), Rect::new(0, 0, w, h));
        surface.set_fg(settings.clear.fg);
        surface.set_bg(settings.clear.bg);
        root.draw(&mut surface);
    }
    backend.flush()
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
