//! Scene objects and the demo scene shown by the creator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Objects are created as static demo data. Only the injected
//! [`crate::editor::SceneEditor`] mutates them after startup.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use serde::{Deserialize, Serialize};

/// Variant tag of a scene object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Brick,
    Anchor,
    Group,
}

impl ObjectKind {
    /// Lowercase tag used on the string channel and in CSS modifiers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Anchor => "anchor",
            Self::Group => "group",
        }
    }

    /// Human-readable label for panels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Brick => "Brick",
            Self::Anchor => "Anchor",
            Self::Group => "Group",
        }
    }
}

/// An entity in the construction scene.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub visible: bool,
    pub locked: bool,
    /// Ordered member ids; only groups carry this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

impl SceneObject {
    #[must_use]
    pub fn brick(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ObjectKind::Brick)
    }

    #[must_use]
    pub fn anchor(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ObjectKind::Anchor)
    }

    #[must_use]
    pub fn group(id: impl Into<String>, name: impl Into<String>, children: Vec<String>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(id, name, ObjectKind::Group)
        }
    }

    fn new(id: impl Into<String>, name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: true,
            locked: false,
            children: None,
        }
    }

    /// Member ids, empty for non-groups.
    #[must_use]
    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Look up an object by id.
#[must_use]
pub fn find<'a>(objects: &'a [SceneObject], id: &str) -> Option<&'a SceneObject> {
    objects.iter().find(|obj| obj.id == id)
}

/// Mutable lookup by id.
pub fn find_mut<'a>(objects: &'a mut [SceneObject], id: &str) -> Option<&'a mut SceneObject> {
    objects.iter_mut().find(|obj| obj.id == id)
}

/// Demo scene: a grouped foundation course, loose bricks and two anchors.
#[must_use]
pub fn demo_scene() -> Vec<SceneObject> {
    let mut objects = Vec::new();

    objects.push(SceneObject::group(
        "group-foundation",
        "Foundation Course",
        vec!["brick-0".to_owned(), "brick-1".to_owned(), "brick-2".to_owned()],
    ));

    for i in 0..6 {
        objects.push(SceneObject::brick(format!("brick-{i}"), format!("Brick {}", i + 1)));
    }

    let mut ground = SceneObject::anchor("anchor-ground", "Ground Anchor");
    ground.locked = true;
    objects.push(ground);
    objects.push(SceneObject::anchor("anchor-wall", "Wall Anchor"));

    if let Some(hidden) = find_mut(&mut objects, "brick-5") {
        hidden.visible = false;
    }

    objects
}
