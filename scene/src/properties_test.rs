use super::*;
use crate::object::demo_scene;

#[test]
fn derive_single_selection_matches_object() {
    let objects = demo_scene();
    let selection = Selection::from_ids(["brick-2"]);
    let props = derive_properties(&objects, &selection).expect("properties");
    assert_eq!(props.id, "brick-2");
    assert_eq!(props.name, "Brick 3");
    assert_eq!(props.kind, ObjectKind::Brick);
}

#[test]
fn derive_fills_default_transform_and_appearance() {
    let objects = demo_scene();
    let props = derive_properties(&objects, &Selection::from_ids(["anchor-wall"])).expect("properties");
    assert_eq!(props.transform.position, Vec3::ZERO);
    assert_eq!(props.transform.rotation, Vec3::ZERO);
    assert_eq!(props.transform.scale, Vec3::ONE);
    assert_eq!(props.material, DEFAULT_MATERIAL);
    assert_eq!(props.color, DEFAULT_COLOR);
    assert!((props.opacity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn derive_absent_for_empty_or_multiple_selection() {
    let objects = demo_scene();
    assert!(derive_properties(&objects, &Selection::new()).is_none());
    assert!(derive_properties(&objects, &Selection::from_ids(["brick-0", "brick-1"])).is_none());
}

#[test]
fn derive_absent_for_dangling_single_selection() {
    let objects = demo_scene();
    assert!(derive_properties(&objects, &Selection::from_ids(["ghost"])).is_none());
}

#[test]
fn group_metadata_counts_children() {
    let objects = demo_scene();
    let props =
        derive_properties(&objects, &Selection::from_ids(["group-foundation"])).expect("properties");
    assert_eq!(props.metadata.get("children").map(String::as_str), Some("3"));
    assert_eq!(props.metadata.get("kind").map(String::as_str), Some("group"));
}

#[test]
fn vec3_get_set_by_axis() {
    let mut v = Vec3::ZERO;
    v.set(Axis::Y, 2.5);
    assert!((v.get(Axis::Y) - 2.5).abs() < f64::EPSILON);
    assert!(v.get(Axis::X).abs() < f64::EPSILON);
}

#[test]
fn parse_number_input_accepts_plain_and_comma_decimals() {
    assert_eq!(parse_number_input(" 12 "), Some(12.0));
    assert_eq!(parse_number_input("-0,5"), Some(-0.5));
}

#[test]
fn parse_number_input_rejects_garbage() {
    assert_eq!(parse_number_input(""), None);
    assert_eq!(parse_number_input("abc"), None);
    assert_eq!(parse_number_input("inf"), None);
    assert_eq!(parse_number_input("NaN"), None);
}

#[test]
fn clamp_opacity_bounds() {
    assert!((clamp_opacity(1.7) - 1.0).abs() < f64::EPSILON);
    assert!(clamp_opacity(-0.2).abs() < f64::EPSILON);
}

#[test]
fn only_unlock_is_allowed_when_locked() {
    assert!(PropertyEdit::Locked(false).allowed_when_locked());
    assert!(!PropertyEdit::Name("x".to_owned()).allowed_when_locked());
    assert!(!PropertyEdit::Opacity(0.5).allowed_when_locked());
}
