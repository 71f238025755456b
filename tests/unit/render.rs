use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::style::{Color, Style};
use crate::ui::widgets::{Label, Tint};
use crate::{grid, row};

#[test]
fn draw_without_root_clears_and_flushes() {
    let mut backend = TestBackend::new(3, 1);
    draw(&mut backend, Some(&Label::new("abc"))).unwrap();
    draw(&mut backend, None).unwrap();
    assert_eq!(backend.lines(), vec!["   "]);
    assert_eq!(backend.clears(), 2);
    assert_eq!(backend.flushes(), 2);
}

#[test]
fn every_pass_repaints_from_scratch() {
    let mut backend = TestBackend::new(5, 1);
    draw(&mut backend, Some(&Label::new("hello"))).unwrap();
    draw(&mut backend, Some(&Label::new("hi"))).unwrap();
    assert_eq!(backend.lines(), vec!["hi   "]);
}

#[test]
fn root_fills_the_whole_grid() {
    let mut backend = TestBackend::new(8, 2);
    let root = grid![
        row![Label::new("k:"), Label::new("v")],
        row![Label::new("key:"), Tint::new(Label::new("w")).fg(Color::RED)],
    ];
    draw(&mut backend, Some(&root)).unwrap();
    assert_eq!(backend.lines(), vec!["k:   v  ", "key: w  "]);
    assert_eq!(backend.buffer().cell(5, 1).unwrap().style.fg, Color::RED);
}

#[test]
fn clear_style_is_inherited_by_widgets() {
    let mut backend = TestBackend::new(2, 1);
    let settings = DrawSettings {
        clear: Style::new(Color::WHITE, Color::BLUE),
    };
    draw_with(&mut backend, Some(&Label::new("a")), &settings).unwrap();
    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().style, settings.clear);
    assert_eq!(buf.cell(1, 0).unwrap().style, settings.clear);
}
