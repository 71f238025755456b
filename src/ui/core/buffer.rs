//! The character-cell grid a backend owns and surfaces paint into.

use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const fn blank(style: Style) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::default())
    }
}

/// Row-major grid of cells anchored at `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            area: Rect::new(0, 0, width, height),
            cells: vec![Cell::default(); len],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.w
    }

    pub fn height(&self) -> u16 {
        self.area.h
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    /// Writes `cell` at `(x, y)`; coordinates outside the grid are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.cell_mut(x, y) {
            *slot = cell;
        }
    }

    /// Resets every cell to a blank in `style`.
    pub fn fill(&mut self, style: Style) {
        self.cells.fill(Cell::blank(style));
    }

    /// Fills the part of `rect` that lies on the grid.
    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        let clip = rect.intersect(self.area);
        if clip.is_empty() {
            return;
        }
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.set(x, y, Cell::blank(style));
            }
        }
    }

    /// Changes the grid size, discarding the previous contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.area.w == width && self.area.h == height {
            return;
        }
        *self = Self::new(width, height);
    }

    /// Row `y` as a string of cell characters.
    pub fn line(&self, y: u16) -> Option<String> {
        if y >= self.area.h {
            return None;
        }
        let start = y as usize * self.area.w as usize;
        let end = start + self.area.w as usize;
        Some(self.cells[start..end].iter().map(|c| c.ch).collect())
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.area.h).filter_map(|y| self.line(y)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        let w = self.area.w.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new((i % w) as u16, (i / w) as u16), cell))
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if !self.area.contains(Pos::new(x, y)) {
            return None;
        }
        Some(y as usize * self.area.w as usize + x as usize)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/buffer.rs"]
mod tests;
