//! Rendering backends.
//!
//! A backend owns the cell grid that surfaces paint into and knows how to put
//! it on screen. The engine only talks to this trait, so the rest of the crate
//! never mentions `ratatui` or `crossterm`.

use std::io;

use crate::ui::core::buffer::CellBuffer;
use crate::ui::core::style::Style;

pub trait Backend {
    /// Current grid size as `(width, height)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Resets every cell to a blank in `style`, adopting the current size.
    fn clear(&mut self, style: Style) -> io::Result<()>;

    fn buffer_mut(&mut self) -> &mut CellBuffer;

    /// Presents the buffer.
    fn flush(&mut self) -> io::Result<()>;
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
