use super::*;

#[test]
fn default_style_uses_terminal_colors() {
    let s = Style::default();
    assert!(s.fg.is_reset());
    assert!(s.bg.is_reset());
}

#[test]
fn style_builder_sets_fields() {
    let s = Style::default().fg(Color::Rgb(1, 2, 3)).bg(Color::Indexed(8));
    assert_eq!(s.fg, Color::Rgb(1, 2, 3));
    assert_eq!(s.bg, Color::Indexed(8));
}

#[test]
fn patch_skips_reset_colors() {
    let base = Style::new(Color::RED, Color::BLUE);
    let patched = base.patch(Style::default().bg(Color::GREEN));
    assert_eq!(patched, Style::new(Color::RED, Color::GREEN));
    assert_eq!(base.patch(Style::default()), base);
}

#[test]
fn colors_serialize_as_snake_case_tokens() {
    let json = serde_json::to_string(&Style::new(Color::Reset, Color::Indexed(3))).unwrap();
    assert_eq!(json, r#"{"fg":"reset","bg":{"indexed":3}}"#);
    let back: Style = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Style::new(Color::Reset, Color::YELLOW));
}

#[test]
fn missing_style_fields_default_to_reset() {
    let s: Style = serde_json::from_str(r#"{"fg":{"rgb":[1,2,3]}}"#).unwrap();
    assert_eq!(s, Style::default().fg(Color::Rgb(1, 2, 3)));
}
