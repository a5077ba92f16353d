//! Single-selection property projection and inspector edits.
//!
//! DESIGN
//! ======
//! There is no transform store behind the scene, so the projection fills the
//! transform and appearance fields with fixed defaults. The projection is a
//! pure function of the object list and the selection.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::object::{ObjectKind, SceneObject, find};
use crate::selection::Selection;

pub const DEFAULT_MATERIAL: &str = "brick-red";
pub const DEFAULT_COLOR: &str = "#b5523b";
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Component axis of a [`Vec3`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Display projection of the single selected object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperties {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub visible: bool,
    pub locked: bool,
    pub transform: Transform,
    pub material: String,
    pub color: String,
    pub opacity: f64,
    pub metadata: BTreeMap<String, String>,
}

impl ObjectProperties {
    fn from_object(obj: &SceneObject) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("source".to_owned(), "demo".to_owned());
        metadata.insert("kind".to_owned(), obj.kind.as_str().to_owned());
        if obj.kind == ObjectKind::Group {
            metadata.insert("children".to_owned(), obj.child_ids().len().to_string());
        }

        Self {
            id: obj.id.clone(),
            name: obj.name.clone(),
            kind: obj.kind,
            visible: obj.visible,
            locked: obj.locked,
            transform: Transform::default(),
            material: DEFAULT_MATERIAL.to_owned(),
            color: DEFAULT_COLOR.to_owned(),
            opacity: DEFAULT_OPACITY,
            metadata,
        }
    }
}

/// Properties of the selected object when exactly one existing object is
/// selected; `None` for empty, multiple or dangling selections.
#[must_use]
pub fn derive_properties(objects: &[SceneObject], selection: &Selection) -> Option<ObjectProperties> {
    let id = selection.single()?;
    find(objects, id).map(ObjectProperties::from_object)
}

/// Field edit emitted by the property inspector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "kebab-case")]
pub enum PropertyEdit {
    Name(String),
    Position(Axis, f64),
    Rotation(Axis, f64),
    Scale(Axis, f64),
    Material(String),
    Color(String),
    Opacity(f64),
    Visible(bool),
    Locked(bool),
    Metadata { key: String, value: String },
}

impl PropertyEdit {
    /// Edits that stay allowed on a locked object.
    #[must_use]
    pub fn allowed_when_locked(&self) -> bool {
        matches!(self, Self::Locked(false))
    }
}

/// Lenient numeric input parse: trims, accepts a comma decimal separator and
/// rejects non-finite values.
#[must_use]
pub fn parse_number_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Clamp opacity input into `0.0..=1.0`.
#[must_use]
pub fn clamp_opacity(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
