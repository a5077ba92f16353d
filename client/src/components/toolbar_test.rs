use super::*;

#[test]
fn tool_title_includes_shortcut() {
    assert_eq!(tool_title(ToolMode::Select), "Select (V)");
    assert_eq!(tool_title(ToolMode::PlaceBrick), "Brick (B)");
    assert_eq!(tool_title(ToolMode::PlaceAnchor), "Anchor (A)");
}
