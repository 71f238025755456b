use crate::ui::core::negotiate::Extent;
use crate::ui::core::style::{Color, Style};
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::Widget;

/// Paints its child with different colors. `Color::Reset` leaves the
/// inherited color alone.
#[derive(Clone, Debug)]
pub struct Tint<W> {
    pub fg: Color,
    pub bg: Color,
    pub child: W,
}

impl<W: Widget> Tint<W> {
    pub fn new(child: W) -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            child,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }
}

impl<W: Widget> Widget for Tint<W> {
    fn req_width(&self) -> Extent {
        self.child.req_width()
    }

    fn req_height(&self) -> Extent {
        self.child.req_height()
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        // Recolor a full-size clip so the caller's surface keeps its colors.
        let (w, h) = (surface.width() as i32, surface.height() as i32);
        let style = surface.style().patch(Style::new(self.fg, self.bg));
        let mut surface = surface.clip(0, 0, w, h);
        surface.set_fg(style.fg);
        surface.set_bg(style.bg);
        self.child.draw(&mut surface);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/tint.rs"]
mod tests;
