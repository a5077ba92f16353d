use super::*;
use crate::object::demo_scene;

#[test]
fn in_memory_toggles_visibility_and_lock() {
    let mut objects = demo_scene();
    InMemoryEditor.toggle_visibility(&mut objects, "brick-5").expect("visibility");
    InMemoryEditor.toggle_lock(&mut objects, "brick-0").expect("lock");
    assert!(find(&objects, "brick-5").expect("brick-5").visible);
    assert!(find(&objects, "brick-0").expect("brick-0").locked);
}

#[test]
fn in_memory_rejects_unknown_ids() {
    let mut objects = demo_scene();
    let err = InMemoryEditor.toggle_lock(&mut objects, "ghost").expect_err("unknown");
    assert_eq!(err, SceneError::UnknownObject("ghost".to_owned()));
}

#[test]
fn in_memory_group_moves_members_out_of_old_group() {
    let mut objects = demo_scene();
    let members = vec!["brick-2".to_owned(), "brick-3".to_owned()];
    let id = InMemoryEditor
        .create_group(&mut objects, &members)
        .expect("group")
        .expect("group id");

    assert!(id.starts_with("group-"));
    let group = find(&objects, &id).expect("new group");
    assert_eq!(group.kind, ObjectKind::Group);
    assert_eq!(group.name, "Group 2");
    assert_eq!(group.child_ids(), members.as_slice());

    let old = find(&objects, "group-foundation").expect("old group");
    assert_eq!(old.child_ids(), ["brick-0".to_owned(), "brick-1".to_owned()]);
}

#[test]
fn in_memory_group_requires_members() {
    let mut objects = demo_scene();
    let err = InMemoryEditor.create_group(&mut objects, &[]).expect_err("empty");
    assert_eq!(err, SceneError::EmptyGroup);
}

#[test]
fn in_memory_group_rejects_unknown_member_without_mutating() {
    let mut objects = demo_scene();
    let before = objects.clone();
    let err = InMemoryEditor
        .create_group(&mut objects, &["brick-0".to_owned(), "ghost".to_owned()])
        .expect_err("unknown member");
    assert_eq!(err, SceneError::UnknownObject("ghost".to_owned()));
    assert_eq!(objects, before);
}

#[test]
fn in_memory_rename_trims_and_ignores_blank() {
    let mut objects = demo_scene();
    InMemoryEditor
        .apply_edit(&mut objects, "brick-1", &PropertyEdit::Name("  Keystone ".to_owned()))
        .expect("rename");
    InMemoryEditor
        .apply_edit(&mut objects, "brick-1", &PropertyEdit::Name("   ".to_owned()))
        .expect("blank rename");
    assert_eq!(find(&objects, "brick-1").expect("brick-1").name, "Keystone");
}

#[test]
fn in_memory_locked_object_only_accepts_unlock() {
    let mut objects = demo_scene();
    let err = InMemoryEditor
        .apply_edit(&mut objects, "anchor-ground", &PropertyEdit::Visible(false))
        .expect_err("locked");
    assert_eq!(err, SceneError::Locked("anchor-ground".to_owned()));

    InMemoryEditor
        .apply_edit(&mut objects, "anchor-ground", &PropertyEdit::Locked(false))
        .expect("unlock");
    assert!(!find(&objects, "anchor-ground").expect("anchor").locked);
}

#[test]
fn in_memory_locked_object_keeps_its_visibility() {
    let mut objects = demo_scene();
    let err = InMemoryEditor
        .toggle_visibility(&mut objects, "anchor-ground")
        .expect_err("locked");
    assert_eq!(err, SceneError::Locked("anchor-ground".to_owned()));
    assert!(find(&objects, "anchor-ground").expect("anchor").visible);
}

#[test]
fn in_memory_group_rejects_locked_member_without_mutating() {
    let mut objects = demo_scene();
    let before = objects.clone();
    let err = InMemoryEditor
        .create_group(&mut objects, &["brick-0".to_owned(), "anchor-ground".to_owned()])
        .expect_err("locked member");
    assert_eq!(err, SceneError::Locked("anchor-ground".to_owned()));
    assert_eq!(objects, before);
}

#[test]
fn in_memory_group_ignores_repeated_members() {
    let mut objects = demo_scene();
    let members = ["brick-3".to_owned(), "brick-4".to_owned(), "brick-3".to_owned()];
    let id = InMemoryEditor
        .create_group(&mut objects, &members)
        .expect("group")
        .expect("group id");
    let group = find(&objects, &id).expect("new group");
    assert_eq!(group.child_ids(), ["brick-3".to_owned(), "brick-4".to_owned()]);
}

#[test]
fn logging_editor_leaves_scene_untouched() {
    let mut objects = demo_scene();
    let before = objects.clone();
    LoggingEditor.toggle_visibility(&mut objects, "brick-0").expect("visibility");
    LoggingEditor.toggle_lock(&mut objects, "brick-0").expect("lock");
    let created = LoggingEditor
        .create_group(&mut objects, &["brick-0".to_owned()])
        .expect("group");
    assert_eq!(created, None);
    assert_eq!(objects, before);
}

#[test]
fn logging_store_serializes_snapshot() {
    let objects = demo_scene();
    let selection = Selection::from_ids(["brick-0"]);
    let shelf = MaterialShelf::default();
    let snapshot = ProjectSnapshot {
        objects: &objects,
        selection: &selection,
        selected_material: Some("wood-oak"),
        panels: PanelVisibility::default(),
        viewport: ViewportSettings::default(),
        shelf: &shelf,
    };
    LoggingStore.save_project(&snapshot).expect("save");

    let json = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(json["selection"], serde_json::json!(["brick-0"]));
    assert_eq!(json["selected_material"], "wood-oak");
    assert_eq!(json["viewport"]["view_mode"], "solid");
}
