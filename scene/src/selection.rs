//! Ordered selection set of scene object ids.
//!
//! DESIGN
//! ======
//! Ids keep insertion order so multi-select reads back in the order the user
//! clicked. The set accepts any id; callers that need the hardened behavior
//! check membership against the scene first.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::object::{SceneObject, find};

/// Serialized as a plain id list; deserializing drops repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    ids: Vec<String>,
}

impl From<Vec<String>> for Selection {
    fn from(ids: Vec<String>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from ids, dropping repeats.
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Apply a click: `multi` toggles membership, otherwise replaces the set.
    pub fn select(&mut self, id: &str, multi: bool) {
        if multi {
            self.toggle(id);
        } else {
            self.ids.clear();
            self.ids.push(id.to_owned());
        }
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_owned());
        }
    }

    /// Remove `id` if present.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// The selected id when exactly one object is selected.
    #[must_use]
    pub fn single(&self) -> Option<&str> {
        match self.ids.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Selected ids with no matching object in `objects`.
    #[must_use]
    pub fn dangling<'a>(&'a self, objects: &[SceneObject]) -> Vec<&'a str> {
        self.iter().filter(|id| find(objects, id).is_none()).collect()
    }
}
