//! Injected collaborators for scene mutation and project persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The creator has no geometry engine and no persistence layer. The page
//! controller talks to both through these traits so a host can plug real
//! implementations in. [`LoggingEditor`] and [`LoggingStore`] only log;
//! [`InMemoryEditor`] applies edits to the in-memory object list so the demo
//! scene responds to the outliner and inspector.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::Serialize;

use crate::error::{SceneError, StoreError};
use crate::material::MaterialShelf;
use crate::object::{ObjectKind, SceneObject, find, find_mut};
use crate::panels::PanelVisibility;
use crate::properties::PropertyEdit;
use crate::selection::Selection;
use crate::viewport::ViewportSettings;

/// Scene-mutation engine.
pub trait SceneEditor: Send + Sync {
    /// Flip the visibility flag of `id`.
    ///
    /// # Errors
    ///
    /// Implementations return [`SceneError::UnknownObject`] for missing ids
    /// and may return [`SceneError::Locked`] for locked objects.
    fn toggle_visibility(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError>;

    /// Flip the lock flag of `id`.
    ///
    /// # Errors
    ///
    /// Implementations return [`SceneError::UnknownObject`] for missing ids.
    fn toggle_lock(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError>;

    /// Group `members` (repeats ignored); returns the new group id when one
    /// was created.
    ///
    /// # Errors
    ///
    /// Implementations return [`SceneError::EmptyGroup`],
    /// [`SceneError::UnknownObject`] or [`SceneError::Locked`].
    fn create_group(
        &self,
        objects: &mut Vec<SceneObject>,
        members: &[String],
    ) -> Result<Option<String>, SceneError>;

    /// Apply one inspector edit to `id`.
    ///
    /// # Errors
    ///
    /// Implementations return [`SceneError::UnknownObject`] or
    /// [`SceneError::Locked`].
    fn apply_edit(
        &self,
        objects: &mut Vec<SceneObject>,
        id: &str,
        edit: &PropertyEdit,
    ) -> Result<(), SceneError>;
}

/// Serializable view of the controller handed to [`ProjectStore::save_project`].
#[derive(Clone, Debug, Serialize)]
pub struct ProjectSnapshot<'a> {
    pub objects: &'a [SceneObject],
    pub selection: &'a Selection,
    pub selected_material: Option<&'a str>,
    pub panels: PanelVisibility,
    pub viewport: ViewportSettings,
    pub shelf: &'a MaterialShelf,
}

/// Project persistence and asset backend.
pub trait ProjectStore: Send + Sync {
    /// Start an empty project.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn new_project(&self) -> Result<(), StoreError>;

    /// Persist `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] when the snapshot cannot be encoded.
    fn save_project(&self, snapshot: &ProjectSnapshot<'_>) -> Result<(), StoreError>;

    /// Fetch the texture pack for `material_id`.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn download_material(&self, material_id: &str) -> Result<(), StoreError>;

    /// Record a favorite flag change.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn set_favorite(&self, material_id: &str, favorite: bool) -> Result<(), StoreError>;
}

/// Editor that logs every request and leaves the scene untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingEditor;

impl SceneEditor for LoggingEditor {
    fn toggle_visibility(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError> {
        require(objects, id)?;
        log::info!("scene: toggle visibility of {id}");
        Ok(())
    }

    fn toggle_lock(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError> {
        require(objects, id)?;
        log::info!("scene: toggle lock of {id}");
        Ok(())
    }

    fn create_group(
        &self,
        _objects: &mut Vec<SceneObject>,
        members: &[String],
    ) -> Result<Option<String>, SceneError> {
        if members.is_empty() {
            return Err(SceneError::EmptyGroup);
        }
        log::info!("scene: create group from {members:?}");
        Ok(None)
    }

    fn apply_edit(
        &self,
        objects: &mut Vec<SceneObject>,
        id: &str,
        edit: &PropertyEdit,
    ) -> Result<(), SceneError> {
        require(objects, id)?;
        log::info!("scene: edit {id}: {edit:?}");
        Ok(())
    }
}

/// Editor that applies visibility, lock, rename and grouping in memory.
/// Transform and appearance edits have no backing store and are logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct InMemoryEditor;

impl SceneEditor for InMemoryEditor {
    fn toggle_visibility(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError> {
        let obj = find_mut(objects, id).ok_or_else(|| SceneError::UnknownObject(id.to_owned()))?;
        if obj.locked {
            return Err(SceneError::Locked(id.to_owned()));
        }
        obj.visible = !obj.visible;
        log::debug!("scene: {id} visible={}", obj.visible);
        Ok(())
    }

    fn toggle_lock(&self, objects: &mut Vec<SceneObject>, id: &str) -> Result<(), SceneError> {
        let obj = find_mut(objects, id).ok_or_else(|| SceneError::UnknownObject(id.to_owned()))?;
        obj.locked = !obj.locked;
        log::debug!("scene: {id} locked={}", obj.locked);
        Ok(())
    }

    fn create_group(
        &self,
        objects: &mut Vec<SceneObject>,
        members: &[String],
    ) -> Result<Option<String>, SceneError> {
        let unique = Selection::from_ids(members.iter().map(String::as_str));
        if unique.is_empty() {
            return Err(SceneError::EmptyGroup);
        }
        // Validate every member before touching any group.
        for id in unique.iter() {
            if require(objects, id)?.locked {
                return Err(SceneError::Locked(id.to_owned()));
            }
        }
        let members = unique.ids();

        // A member belongs to one group at a time.
        for obj in objects.iter_mut() {
            if let Some(children) = obj.children.as_mut() {
                children.retain(|child| !members.contains(child));
            }
        }

        let group_count = objects.iter().filter(|o| o.kind == ObjectKind::Group).count();
        let id = format!("group-{}", uuid::Uuid::new_v4());
        let name = format!("Group {}", group_count + 1);
        objects.push(SceneObject::group(id.clone(), name, members.to_vec()));
        log::info!("scene: created {id} with {} members", members.len());
        Ok(Some(id))
    }

    fn apply_edit(
        &self,
        objects: &mut Vec<SceneObject>,
        id: &str,
        edit: &PropertyEdit,
    ) -> Result<(), SceneError> {
        let obj = find_mut(objects, id).ok_or_else(|| SceneError::UnknownObject(id.to_owned()))?;
        if obj.locked && !edit.allowed_when_locked() {
            return Err(SceneError::Locked(id.to_owned()));
        }

        match edit {
            PropertyEdit::Name(name) => {
                let trimmed = name.trim();
                if !trimmed.is_empty() {
                    obj.name = trimmed.to_owned();
                }
            }
            PropertyEdit::Visible(visible) => obj.visible = *visible,
            PropertyEdit::Locked(locked) => obj.locked = *locked,
            other => log::info!("scene: no transform store, dropping {other:?} for {id}"),
        }
        Ok(())
    }
}

/// Store that logs requests; saving serializes the snapshot and logs its size.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingStore;

impl ProjectStore for LoggingStore {
    fn new_project(&self) -> Result<(), StoreError> {
        log::info!("project: new project requested");
        Ok(())
    }

    fn save_project(&self, snapshot: &ProjectSnapshot<'_>) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(snapshot)?;
        log::info!(
            "project: saved {} objects ({} bytes)",
            snapshot.objects.len(),
            encoded.len()
        );
        Ok(())
    }

    fn download_material(&self, material_id: &str) -> Result<(), StoreError> {
        log::info!("project: download material {material_id}");
        Ok(())
    }

    fn set_favorite(&self, material_id: &str, favorite: bool) -> Result<(), StoreError> {
        log::info!("project: material {material_id} favorite={favorite}");
        Ok(())
    }
}

fn require<'a>(objects: &'a [SceneObject], id: &str) -> Result<&'a SceneObject, SceneError> {
    find(objects, id).ok_or_else(|| SceneError::UnknownObject(id.to_owned()))
}
