use super::*;

#[test]
fn all_panels_start_visible() {
    let panels = PanelVisibility::default();
    for panel in Panel::ALL {
        assert!(panels.is_visible(panel));
    }
}

#[test]
fn double_toggle_restores_visibility() {
    let mut panels = PanelVisibility::default();
    assert!(!panels.toggle(Panel::Properties));
    assert!(panels.toggle(Panel::Properties));
    assert_eq!(panels, PanelVisibility::default());
}

#[test]
fn toggle_touches_only_one_panel() {
    let mut panels = PanelVisibility::default();
    panels.toggle(Panel::Materials);
    assert!(panels.properties);
    assert!(panels.outliner);
    assert!(!panels.materials);
}

#[test]
fn panel_deserializes_from_lowercase() {
    let panel: Panel = serde_json::from_value(serde_json::json!("outliner")).expect("panel");
    assert_eq!(panel, Panel::Outliner);
    assert_eq!(panel.as_str(), "outliner");
}
