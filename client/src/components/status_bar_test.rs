use super::*;

#[test]
fn fps_and_memory_are_rounded_for_display() {
    assert_eq!(format_fps(59.6), "60 FPS");
    assert_eq!(format_memory(118.5), "118.5 MB");
    assert_eq!(format_memory(96.0), "96.0 MB");
}

#[test]
fn object_counts_list_totals() {
    let telemetry = Telemetry {
        object_count: 9,
        visible_count: 8,
        locked_count: 1,
        ..Telemetry::default()
    };
    assert_eq!(format_object_counts(&telemetry), "9 objects · 8 visible · 1 locked");
}

#[test]
fn selection_label_handles_empty() {
    assert_eq!(format_selection(0), "no selection");
    assert_eq!(format_selection(3), "3 selected");
}

#[test]
fn toggles_render_both_flags() {
    assert_eq!(format_toggles(true, false), "GRID ON · SNAP OFF");
    assert_eq!(format_toggles(false, true), "GRID OFF · SNAP ON");
}
