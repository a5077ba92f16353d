use super::*;

#[test]
fn format_number_trims_trailing_zeros() {
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(0.25), "0.25");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0001), "0");
    assert_eq!(format_number(12.3456), "12.346");
}

#[test]
fn empty_state_explains_why_nothing_is_shown() {
    assert_eq!(empty_state_label(0), "No selection");
    assert_eq!(empty_state_label(1), "Selected object not found");
    assert_eq!(empty_state_label(4), "4 objects selected");
    assert!(empty_state_hint(2).contains("single object"));
}

#[test]
fn short_id_truncates_long_group_ids() {
    assert_eq!(short_id("brick-0"), "brick-0");
    let long = "group-3f0c1f8e-8d2b-4c61-9a55-0b7e1d2c3a4b";
    let shown = short_id(long);
    assert!(shown.starts_with("group-3f0c1f8e"));
    assert!(shown.ends_with('…'));
}
