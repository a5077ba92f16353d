use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_builds_never_report_fullscreen() {
    assert!(!is_active());
    assert!(!toggle());
    assert!(!is_active());
}
