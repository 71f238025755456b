//! Clipped drawing surfaces.
//!
//! A [`Surface`] is a rectangular window onto a [`CellBuffer`] with its own
//! paint cursor and colors. Children only ever receive surfaces derived with
//! [`Surface::clip`], so a widget cannot write outside the rectangle its parent
//! handed it.
//!
//! A surface may be *absent*: clipping outside the parent's bounds produces one
//! instead of an error. Every operation on an absent surface does nothing and
//! its size is zero, so bad layout requests paint nothing rather than fail.

use super::buffer::{Cell, CellBuffer};
use super::geom::{Pos, Rect};
use super::style::{Color, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    rect: Rect,
    /// Relative to `rect`'s origin. `x == rect.w` means the row is full.
    cursor: Pos,
    style: Style,
}

pub struct Surface<'a> {
    buf: &'a mut CellBuffer,
    region: Option<Region>,
}

impl<'a> Surface<'a> {
    /// A surface over `rect`, cut down to the part that lies on `buf`.
    pub fn new(buf: &'a mut CellBuffer, rect: Rect) -> Self {
        let rect = rect.intersect(buf.area());
        Self {
            buf,
            region: Some(Region {
                rect,
                cursor: Pos::default(),
                style: Style::default(),
            }),
        }
    }

    pub fn absent(buf: &'a mut CellBuffer) -> Self {
        Self { buf, region: None }
    }

    /// Derives the sub-rectangle `(x, y, w, h)`, relative to this surface's
    /// origin. The result is absent when any value is negative, when the
    /// rectangle crosses the right or bottom edge, or when `self` is absent.
    /// A live result starts with the cursor at its origin and inherits the
    /// current colors.
    pub fn clip(&mut self, x: i32, y: i32, w: i32, h: i32) -> Surface<'_> {
        let Some(parent) = self.region else {
            return Surface::absent(&mut *self.buf);
        };
        let Some(rect) = sub_rect(parent.rect, x, y, w, h) else {
            tracing::trace!(x, y, w, h, parent = ?parent.rect, "clip outside surface");
            return Surface::absent(&mut *self.buf);
        };
        debug_assert!(parent.rect.encloses(rect));
        Surface {
            buf: &mut *self.buf,
            region: Some(Region {
                rect,
                cursor: Pos::default(),
                style: parent.style,
            }),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.region.is_none()
    }

    pub fn width(&self) -> u16 {
        self.region.map_or(0, |r| r.rect.w)
    }

    pub fn height(&self) -> u16 {
        self.region.map_or(0, |r| r.rect.h)
    }

    /// Absolute rectangle on the cell buffer.
    pub fn rect(&self) -> Option<Rect> {
        self.region.map(|r| r.rect)
    }

    pub fn cursor(&self) -> Option<Pos> {
        self.region.map(|r| r.cursor)
    }

    pub fn style(&self) -> Style {
        self.region.map(|r| r.style).unwrap_or_default()
    }

    pub fn set_fg(&mut self, color: Color) {
        if let Some(region) = self.region.as_mut() {
            region.style.fg = color;
        }
    }

    pub fn set_bg(&mut self, color: Color) {
        if let Some(region) = self.region.as_mut() {
            region.style.bg = color;
        }
    }

    /// Blanks the whole rectangle in the current colors and homes the cursor.
    pub fn clear(&mut self) {
        let Some(region) = self.region.as_mut() else {
            return;
        };
        self.buf.fill_rect(region.rect, region.style);
        region.cursor = Pos::default();
    }

    /// Moves the cursor, clamped to the surface.
    pub fn move_to(&mut self, dx: u16, dy: u16) {
        if let Some(region) = self.region.as_mut() {
            region.cursor = Pos::new(dx.min(region.rect.w), dy.min(region.rect.h));
        }
    }

    /// Paints `text` at the cursor, one cell per `char`, wrapping onto the next
    /// row when the current one is full. Text past the last row is dropped.
    /// `'\n'` ends the current row.
    pub fn print(&mut self, text: &str) {
        let Self { buf, region } = self;
        let Some(region) = region.as_mut() else {
            return;
        };
        let rect = region.rect;
        if rect.w == 0 {
            return;
        }

        let mut chars = text.chars().peekable();
        while let Some(&ch) = chars.peek() {
            let cursor = &mut region.cursor;
            if cursor.y >= rect.h {
                break;
            }
            if ch == '\n' {
                chars.next();
                cursor.x = 0;
                cursor.y = cursor.y.saturating_add(1);
                continue;
            }
            if cursor.x >= rect.w {
                cursor.x = 0;
                cursor.y = cursor.y.saturating_add(1);
                continue;
            }
            chars.next();
            buf.set(
                rect.x + cursor.x,
                rect.y + cursor.y,
                Cell {
                    ch,
                    style: region.style,
                },
            );
            cursor.x += 1;
        }
    }

    /// [`Surface::print`], then moves the cursor to the start of the next row.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        if let Some(region) = self.region.as_mut() {
            region.cursor.x = 0;
            region.cursor.y = region.cursor.y.saturating_add(1);
        }
    }
}

fn sub_rect(parent: Rect, x: i32, y: i32, w: i32, h: i32) -> Option<Rect> {
    if x < 0 || y < 0 || w < 0 || h < 0 {
        return None;
    }
    let (x, y, w, h) = (x as i64, y as i64, w as i64, h as i64);
    if x + w > parent.w as i64 || y + h > parent.h as i64 {
        return None;
    }
    // Bounded by the parent's size, so every value fits in u16.
    Some(Rect::new(
        parent.x + x as u16,
        parent.y + y as u16,
        w as u16,
        h as u16,
    ))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/surface.rs"]
mod tests;
