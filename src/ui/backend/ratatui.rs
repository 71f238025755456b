use crate::ui::backend::Backend;
use crate::ui::core::buffer::CellBuffer;
use crate::ui::core::style::{Color, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// A terminal backed by `ratatui` over `crossterm`.
///
/// Surfaces paint into our own [`CellBuffer`]; `flush` hands the whole grid to
/// ratatui, which diffs it against the previous frame before writing.
pub struct TerminalBackend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    buf: CellBuffer,
}

impl TerminalBackend {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self {
            terminal,
            buf: CellBuffer::new(w, h),
        })
    }
}

impl Backend for TerminalBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn clear(&mut self, style: Style) -> io::Result<()> {
        let (w, h) = self.size()?;
        if (w, h) != (self.buf.width(), self.buf.height()) {
            tracing::debug!(width = w, height = h, "terminal resized");
            self.buf.resize(w, h);
        }
        self.buf.fill(style);
        Ok(())
    }

    fn buffer_mut(&mut self) -> &mut CellBuffer {
        &mut self.buf
    }

    fn flush(&mut self) -> io::Result<()> {
        let buf = &self.buf;
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(PaintWidget { buf }, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    buf: &'a CellBuffer,
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, out: &mut Buffer) {
        for (pos, cell) in self.buf.iter() {
            if pos.x >= area.right() || pos.y >= area.bottom() {
                continue;
            }
            if let Some(target) = out.cell_mut((pos.x, pos.y)) {
                target.set_char(cell.ch).set_style(to_ratatui_style(cell.style));
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    RStyle::default()
        .fg(to_ratatui_color(s.fg))
        .bg(to_ratatui_color(s.bg))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/terminal.rs"]
mod tests;
