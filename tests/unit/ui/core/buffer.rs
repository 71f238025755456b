use super::*;
use crate::ui::core::style::Color;

#[test]
fn new_buffer_is_blank() {
    let buf = CellBuffer::new(3, 2);
    assert_eq!(buf.lines(), vec!["   ".to_string(), "   ".to_string()]);
    assert_eq!(buf.cell(2, 1), Some(&Cell::default()));
}

#[test]
fn out_of_range_cells_are_none() {
    let mut buf = CellBuffer::new(2, 2);
    assert!(buf.cell(2, 0).is_none());
    assert!(buf.cell(0, 2).is_none());
    buf.set(5, 5, Cell { ch: 'x', style: Style::default() });
    assert_eq!(buf.lines(), vec!["  ".to_string(), "  ".to_string()]);
}

#[test]
fn fill_rect_clips_to_buffer_area() {
    let mut buf = CellBuffer::new(2, 2);
    buf.cell_mut(0, 0).unwrap().ch = 'A';
    let style = Style::default().bg(Color::BLUE);
    buf.fill_rect(Rect::new(1, 0, 10, 10), style);
    assert_eq!(buf.cell(0, 0).unwrap().ch, 'A');
    assert_eq!(buf.cell(1, 1).unwrap().style, style);
}

#[test]
fn resize_discards_contents() {
    let mut buf = CellBuffer::new(2, 1);
    buf.cell_mut(0, 0).unwrap().ch = 'A';
    buf.resize(2, 1);
    assert_eq!(buf.cell(0, 0).unwrap().ch, 'A');
    buf.resize(3, 2);
    assert_eq!(buf.area(), Rect::new(0, 0, 3, 2));
    assert_eq!(buf.cell(0, 0).unwrap().ch, ' ');
}

#[test]
fn iter_reports_positions_row_major() {
    let mut buf = CellBuffer::new(2, 2);
    buf.cell_mut(1, 1).unwrap().ch = 'z';
    let (pos, _) = buf.iter().find(|(_, c)| c.ch == 'z').unwrap();
    assert_eq!(pos, Pos::new(1, 1));
}
