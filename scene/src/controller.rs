//! Page controller: owner of scene truth and router of panel events.
//!
//! ARCHITECTURE
//! ============
//! The creator page holds one `PageController`. Child panels receive read-only
//! projections of it and report intents back; the controller turns each
//! intent into exactly one state update (or one collaborator call). Layout
//! actions that concern the hosting page come back out as [`HostRequest`].
//!
//! TRADE-OFFS
//! ==========
//! `select_object` keeps the permissive behavior of accepting ids that are not
//! in the scene; the property projection simply comes out empty for them.
//! `try_select_object` is the hardened entry point for callers that want the
//! rejection reported.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::LayoutAction;
use crate::editor::{InMemoryEditor, LoggingStore, ProjectSnapshot, ProjectStore, SceneEditor};
use crate::error::{ActionError, SceneError, StoreError};
use crate::material::{Material, MaterialIntent, MaterialShelf, catalog, find_material};
use crate::object::{SceneObject, demo_scene, find};
use crate::outliner::OutlinerIntent;
use crate::panels::PanelVisibility;
use crate::properties::{ObjectProperties, PropertyEdit, derive_properties};
use crate::selection::Selection;
use crate::telemetry::Telemetry;
use crate::viewport::ViewportSettings;

/// Layout actions the hosting page must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostRequest {
    Back,
    Navigate(String),
}

#[derive(Clone)]
pub struct PageController {
    pub objects: Vec<SceneObject>,
    pub selection: Selection,
    pub selected_material: Option<String>,
    pub panels: PanelVisibility,
    pub viewport: ViewportSettings,
    pub shelf: MaterialShelf,
    materials: Arc<Vec<Material>>,
    editor: Arc<dyn SceneEditor>,
    store: Arc<dyn ProjectStore>,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("objects", &self.objects.len())
            .field("selection", &self.selection)
            .field("selected_material", &self.selected_material)
            .field("panels", &self.panels)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl PageController {
    /// Controller over `objects` with the given collaborators and the fixed
    /// material catalog.
    #[must_use]
    pub fn new(
        objects: Vec<SceneObject>,
        editor: Arc<dyn SceneEditor>,
        store: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            objects,
            selection: Selection::new(),
            selected_material: None,
            panels: PanelVisibility::default(),
            viewport: ViewportSettings::default(),
            shelf: MaterialShelf::default(),
            materials: Arc::new(catalog()),
            editor,
            store,
        }
    }

    /// Demo scene with the in-memory editor and the logging store.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_scene(), Arc::new(InMemoryEditor), Arc::new(LoggingStore))
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    // =============================================================
    // Selection
    // =============================================================

    /// Multi toggles `id`; otherwise the selection becomes `[id]`. Any id is
    /// accepted.
    pub fn select_object(&mut self, id: &str, multi: bool) {
        self.selection.select(id, multi);
        log::debug!("selection: {:?}", self.selection.ids());
    }

    /// Like [`Self::select_object`] but rejects ids that are not in the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] and leaves the selection as is.
    pub fn try_select_object(&mut self, id: &str, multi: bool) -> Result<(), SceneError> {
        if find(&self.objects, id).is_none() {
            return Err(SceneError::UnknownObject(id.to_owned()));
        }
        self.select_object(id, multi);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected ids with no matching object.
    #[must_use]
    pub fn dangling_selection(&self) -> Vec<&str> {
        self.selection.dangling(&self.objects)
    }

    /// Property projection of the single selection.
    #[must_use]
    pub fn properties(&self) -> Option<ObjectProperties> {
        derive_properties(&self.objects, &self.selection)
    }

    #[must_use]
    pub fn telemetry(&self) -> Telemetry {
        Telemetry::mock(&self.objects, &self.selection)
    }

    #[must_use]
    pub fn snapshot(&self) -> ProjectSnapshot<'_> {
        ProjectSnapshot {
            objects: &self.objects,
            selection: &self.selection,
            selected_material: self.selected_material.as_deref(),
            panels: self.panels,
            viewport: self.viewport,
            shelf: &self.shelf,
        }
    }

    // =============================================================
    // Layout actions
    // =============================================================

    /// Route one layout action. Returns the request the host must handle, if
    /// any.
    pub fn handle_layout_action(&mut self, action: &LayoutAction) -> Option<HostRequest> {
        match action {
            LayoutAction::NewProject => {
                if let Err(e) = self.store.new_project() {
                    log::warn!("new project failed: {e}");
                }
                self.selection.clear();
                self.selected_material = None;
            }
            LayoutAction::SaveProject => {
                if let Err(e) = self.store.save_project(&self.snapshot()) {
                    log::warn!("save project failed: {e}");
                }
            }
            LayoutAction::TogglePanel { panel } => {
                let visible = self.panels.toggle(*panel);
                log::debug!("panel {} visible={visible}", panel.as_str());
            }
            // ShellState mirrors these three flags; both must see the same action stream.
            LayoutAction::SetViewMode { mode } => self.viewport.view_mode = *mode,
            LayoutAction::ToggleGrid => self.viewport.grid_visible = !self.viewport.grid_visible,
            LayoutAction::ToggleSnap => self.viewport.snap_enabled = !self.viewport.snap_enabled,
            LayoutAction::Back => return Some(HostRequest::Back),
            LayoutAction::Navigate { path } => return Some(HostRequest::Navigate(path.clone())),
            LayoutAction::SetTool { .. }
            | LayoutAction::StartConstruction
            | LayoutAction::PauseConstruction
            | LayoutAction::StopConstruction
            | LayoutAction::Fullscreen => {
                log::debug!("layout action {} handled by the shell", action.name());
            }
        }
        None
    }

    /// String-channel entry point.
    ///
    /// # Errors
    ///
    /// Returns the parse error for unknown names or malformed payloads; the
    /// state is left untouched in that case.
    pub fn handle_named_action(
        &mut self,
        name: &str,
        data: Option<&Value>,
    ) -> Result<Option<HostRequest>, ActionError> {
        let action = LayoutAction::from_parts(name, data).inspect_err(|e| {
            log::warn!("ignoring layout action: {e}");
        })?;
        Ok(self.handle_layout_action(&action))
    }

    // =============================================================
    // Panel intents
    // =============================================================

    /// Apply an outliner intent.
    ///
    /// # Errors
    ///
    /// Propagates the scene editor's error; the selection is unchanged then.
    pub fn handle_outliner(&mut self, intent: OutlinerIntent) -> Result<(), SceneError> {
        match intent {
            OutlinerIntent::Select { id, multi } => self.select_object(&id, multi),
            OutlinerIntent::ClearSelection => self.clear_selection(),
            OutlinerIntent::ToggleVisibility(id) => {
                self.editor.toggle_visibility(&mut self.objects, &id)?;
            }
            OutlinerIntent::ToggleLock(id) => self.editor.toggle_lock(&mut self.objects, &id)?,
            OutlinerIntent::CreateGroup(members) => {
                if let Some(group_id) = self.editor.create_group(&mut self.objects, &members)? {
                    self.selection.select(&group_id, false);
                }
            }
        }
        Ok(())
    }

    /// Apply an inspector edit to the single selected object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoSingleSelection`] unless exactly one object is
    /// selected, otherwise propagates the scene editor's error.
    pub fn handle_property_edit(&mut self, edit: PropertyEdit) -> Result<(), SceneError> {
        let id = self
            .selection
            .single()
            .ok_or(SceneError::NoSingleSelection)?
            .to_owned();
        self.editor.apply_edit(&mut self.objects, &id, &edit)
    }

    /// Apply a material library intent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownMaterial`] for ids outside the catalog, or
    /// the store's error. Shelf state only changes when the store accepts.
    pub fn handle_material(&mut self, intent: MaterialIntent) -> Result<(), StoreError> {
        match intent {
            MaterialIntent::Select(id) => {
                self.require_material(&id)?;
                self.selected_material = Some(id);
            }
            MaterialIntent::Download(id) => {
                self.require_material(&id)?;
                if !self.shelf.is_downloaded(&id) {
                    self.store.download_material(&id)?;
                    self.shelf.mark_downloaded(&id);
                }
            }
            MaterialIntent::ToggleFavorite(id) => {
                self.require_material(&id)?;
                let next = !self.shelf.is_favorite(&id);
                self.store.set_favorite(&id, next)?;
                self.shelf.toggle_favorite(&id);
            }
        }
        Ok(())
    }

    fn require_material(&self, id: &str) -> Result<(), StoreError> {
        match find_material(&self.materials, id) {
            Some(_) => Ok(()),
            None => Err(StoreError::UnknownMaterial(id.to_owned())),
        }
    }
}
