use super::*;

#[test]
fn terminal_step_does_not_fire() {
    let trail = creator_trail("Garden Wall");
    assert_eq!(resolve_click(&trail, 2), None);
}

#[test]
fn root_step_fires_back_action() {
    let trail = creator_trail("Garden Wall");
    assert_eq!(
        resolve_click(&trail, 0),
        Some(BreadcrumbEvent::Action(LayoutAction::Back))
    );
}

#[test]
fn path_step_fires_navigation() {
    let trail = creator_trail("Garden Wall");
    assert_eq!(
        resolve_click(&trail, 1),
        Some(BreadcrumbEvent::Navigate("/".to_owned()))
    );
}

#[test]
fn out_of_range_and_untargeted_steps_do_not_fire() {
    let trail = vec![
        BreadcrumbItem::new("Label only", None),
        BreadcrumbItem::new("Here", None),
    ];
    assert_eq!(resolve_click(&trail, 0), None);
    assert_eq!(resolve_click(&trail, 9), None);
    assert_eq!(resolve_click(&[], 0), None);
    assert_eq!(resolve_click(&trail, usize::MAX), None);
    assert_eq!(resolve_click(&creator_trail("P"), usize::MAX), None);
}

#[test]
fn creator_trail_ends_with_project_name() {
    let trail = creator_trail("Garden Wall");
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[2].label, "Garden Wall");
    assert!(trail[2].target.is_none());
}
