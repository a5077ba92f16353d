use super::*;

use scene::shell::ToolMode;
use scene::viewport::ViewMode;

#[test]
fn caption_reflects_chrome_state() {
    let mut shell = ShellState::default();
    assert_eq!(viewport_caption(&shell, 0), "Solid view · Select tool · 0 selected");

    shell.view_mode = ViewMode::Wireframe;
    shell.active_tool = ToolMode::Rotate;
    assert_eq!(viewport_caption(&shell, 2), "Wireframe view · Rotate tool · 2 selected");
}
