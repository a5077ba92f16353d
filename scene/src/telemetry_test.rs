use super::*;
use crate::object::demo_scene;

#[test]
fn mock_counts_reflect_scene() {
    let objects = demo_scene();
    let selection = Selection::from_ids(["brick-0", "brick-1"]);
    let telemetry = Telemetry::mock(&objects, &selection);
    assert_eq!(telemetry.object_count, objects.len());
    assert_eq!(telemetry.visible_count, objects.len() - 1);
    assert_eq!(telemetry.locked_count, 1);
    assert_eq!(telemetry.selected_count, 2);
}

#[test]
fn mock_memory_grows_with_objects() {
    let empty = Telemetry::mock(&[], &Selection::new());
    let full = Telemetry::mock(&demo_scene(), &Selection::new());
    assert!((empty.memory_mb - MOCK_BASE_MEMORY_MB).abs() < f64::EPSILON);
    assert!(full.memory_mb > empty.memory_mb);
    assert!((full.fps - MOCK_FPS).abs() < f64::EPSILON);
}
