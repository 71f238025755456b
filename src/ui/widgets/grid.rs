//! Tables built from rows.
//!
//! A [`Grid`] lines its rows up so that every cell in column `j` gets the same
//! width and every cell in row `i` the same height. It reads the rows' cells
//! directly and never calls `Row::draw`, so the rows' own negotiation is
//! bypassed.

use crate::ui::core::negotiate::Extent;
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::{coord, Widget};

use super::stack::Row;

/// Gap between adjacent columns.
const COLUMN_GAP: usize = 1;

#[derive(Debug, Default)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn with(mut self, row: Row) -> Self {
        self.push(row);
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column widths: the widest minimum among the rows long enough to have
    /// that column.
    pub fn column_widths(&self) -> Vec<usize> {
        let cols = self.rows.iter().map(Row::len).max().unwrap_or(0);
        let mut widths = vec![0usize; cols];
        for row in &self.rows {
            for (j, cell) in row.children().iter().enumerate() {
                widths[j] = widths[j].max(cell.req_width().min);
            }
        }
        widths
    }

    /// Row heights: the tallest minimum among each row's cells.
    pub fn row_heights(&self) -> Vec<usize> {
        self.rows
            .iter()
            .map(|row| {
                row.children()
                    .iter()
                    .map(|cell| cell.req_height().min)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Widget for Grid {
    /// The widest row, plus one unit per row for the gaps drawn between cells.
    fn req_width(&self) -> Extent {
        self.rows
            .iter()
            .map(Row::req_width)
            .fold(Extent::default(), Extent::max_each)
            .pad(self.rows.len() * COLUMN_GAP)
    }

    fn req_height(&self) -> Extent {
        self.rows
            .iter()
            .map(Row::req_height)
            .fold(Extent::default(), Extent::saturating_add)
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        if self.rows.is_empty() || surface.is_absent() {
            return;
        }
        let widths = self.column_widths();
        let heights = self.row_heights();

        let mut y = 0usize;
        for (row, &h) in self.rows.iter().zip(&heights) {
            let mut x = 0usize;
            for (cell, &w) in row.children().iter().zip(&widths) {
                let mut sub = surface.clip(coord(x), coord(y), coord(w), coord(h));
                cell.draw(&mut sub);
                x = x.saturating_add(w).saturating_add(COLUMN_GAP);
            }
            y = y.saturating_add(h);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/grid.rs"]
mod tests;
