//! Outliner intents and tree projection.
//!
//! DESIGN
//! ======
//! The outliner never mutates the selection or the scene. It reports intents
//! and renders the rows produced by [`outliner_rows`].

#[cfg(test)]
#[path = "outliner_test.rs"]
mod outliner_test;

use std::collections::HashSet;

use crate::object::{ObjectKind, SceneObject, find};
use crate::selection::Selection;

/// Request emitted by the scene outliner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutlinerIntent {
    Select { id: String, multi: bool },
    ToggleVisibility(String),
    ToggleLock(String),
    CreateGroup(Vec<String>),
    ClearSelection,
}

/// One line of the outliner tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlinerRow {
    pub id: String,
    pub name: String,
    pub kind: ObjectKind,
    pub depth: usize,
    pub visible: bool,
    pub locked: bool,
    pub selected: bool,
}

/// Flatten the object list into tree rows: every object that is not a member
/// of some group appears at depth 0, followed by its members (recursively).
/// Member ids that do not resolve are skipped and cycles are cut.
#[must_use]
pub fn outliner_rows(objects: &[SceneObject], selection: &Selection) -> Vec<OutlinerRow> {
    let members: HashSet<&str> = objects
        .iter()
        .flat_map(|obj| obj.child_ids().iter().map(String::as_str))
        .filter(|id| find(objects, id).is_some())
        .collect();

    let mut rows = Vec::with_capacity(objects.len());
    let mut visited = HashSet::new();
    for obj in objects.iter().filter(|obj| !members.contains(obj.id.as_str())) {
        push_rows(objects, selection, obj, 0, &mut visited, &mut rows);
    }
    rows
}

fn push_rows<'a>(
    objects: &'a [SceneObject],
    selection: &Selection,
    obj: &'a SceneObject,
    depth: usize,
    visited: &mut HashSet<&'a str>,
    rows: &mut Vec<OutlinerRow>,
) {
    if !visited.insert(obj.id.as_str()) {
        return;
    }
    rows.push(OutlinerRow {
        id: obj.id.clone(),
        name: obj.name.clone(),
        kind: obj.kind,
        depth,
        visible: obj.visible,
        locked: obj.locked,
        selected: selection.contains(&obj.id),
    });
    for child_id in obj.child_ids() {
        if let Some(child) = find(objects, child_id) {
            push_rows(objects, selection, child, depth + 1, visited, rows);
        }
    }
}
