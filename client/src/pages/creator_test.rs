use super::*;

use scene::SceneError;

#[test]
fn project_title_falls_back_for_missing_or_blank_names() {
    assert_eq!(project_title(None), DEFAULT_PROJECT_NAME);
    assert_eq!(project_title(Some("   ".to_owned())), DEFAULT_PROJECT_NAME);
}

#[test]
fn project_title_trims_given_name() {
    assert_eq!(project_title(Some("  Garden Wall ".to_owned())), "Garden Wall");
}

#[test]
fn report_outcome_distinguishes_applied_and_rejected_intents() {
    assert!(report_outcome::<SceneError>("test", Some(Ok(()))));
    assert!(!report_outcome("test", Some(Err(SceneError::EmptyGroup))));
    assert!(!report_outcome::<SceneError>("test", None));
}
