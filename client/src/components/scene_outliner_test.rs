use super::*;

#[test]
fn any_modifier_extends_selection() {
    assert!(!is_multi_select(false, false, false));
    assert!(is_multi_select(true, false, false));
    assert!(is_multi_select(false, true, false));
    assert!(is_multi_select(false, false, true));
}

#[test]
fn row_indent_grows_with_depth() {
    assert_eq!(row_indent(0), "8px");
    assert_eq!(row_indent(1), "22px");
    assert_eq!(row_indent(2), "36px");
}

#[test]
fn every_kind_has_a_distinct_glyph() {
    let glyphs = [ObjectKind::Brick, ObjectKind::Anchor, ObjectKind::Group].map(kind_glyph);
    assert_ne!(glyphs[0], glyphs[1]);
    assert_ne!(glyphs[1], glyphs[2]);
    assert_ne!(glyphs[0], glyphs[2]);
}
