//! Fixed material catalog and library filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is mock data. Favorites and downloads are tracked by the page
//! controller in a [`MaterialShelf`] and reported to the project store.

#[cfg(test)]
#[path = "material_test.rs"]
mod material_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Brick,
    Concrete,
    Wood,
    Metal,
    Glass,
}

impl MaterialCategory {
    pub const ALL: [Self; 5] = [Self::Brick, Self::Concrete, Self::Wood, Self::Metal, Self::Glass];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Concrete => "concrete",
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Glass => "glass",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Brick => "Brick",
            Self::Concrete => "Concrete",
            Self::Wood => "Wood",
            Self::Metal => "Metal",
            Self::Glass => "Glass",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    /// Swatch color as `#rrggbb`.
    pub color: String,
    /// Texture pack size in kilobytes.
    pub size_kb: u32,
}

impl Material {
    fn new(id: &str, name: &str, category: MaterialCategory, color: &str, size_kb: u32) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            color: color.to_owned(),
            size_kb,
        }
    }
}

/// The fixed material catalog.
#[must_use]
pub fn catalog() -> Vec<Material> {
    use MaterialCategory::{Brick, Concrete, Glass, Metal, Wood};
    vec![
        Material::new("brick-red", "Red Clay Brick", Brick, "#b5523b", 840),
        Material::new("brick-yellow", "London Stock Brick", Brick, "#d8b45a", 910),
        Material::new("brick-glazed", "Glazed White Brick", Brick, "#ecebe4", 760),
        Material::new("concrete-raw", "Raw Concrete", Concrete, "#9a9a96", 1200),
        Material::new("concrete-polished", "Polished Concrete", Concrete, "#bdbdb8", 1350),
        Material::new("wood-oak", "Oak Planks", Wood, "#a0703c", 1480),
        Material::new("wood-pine", "Pine Timber", Wood, "#d9b27c", 1020),
        Material::new("metal-steel", "Brushed Steel", Metal, "#8c949c", 990),
        Material::new("metal-copper", "Weathered Copper", Metal, "#4f9a86", 1110),
        Material::new("glass-clear", "Clear Glass", Glass, "#cfe6ef", 430),
        Material::new("glass-frosted", "Frosted Glass", Glass, "#e4eef1", 470),
    ]
}

/// Look up a material by id.
#[must_use]
pub fn find_material<'a>(materials: &'a [Material], id: &str) -> Option<&'a Material> {
    materials.iter().find(|m| m.id == id)
}

/// Favorite and downloaded material ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialShelf {
    pub favorites: BTreeSet<String>,
    pub downloaded: BTreeSet<String>,
}

impl MaterialShelf {
    /// Flip favorite membership and return the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_owned());
            true
        }
    }

    /// Record a download; returns `false` when it was already downloaded.
    pub fn mark_downloaded(&mut self, id: &str) -> bool {
        self.downloaded.insert(id.to_owned())
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn is_downloaded(&self, id: &str) -> bool {
        self.downloaded.contains(id)
    }
}

/// Request emitted by the material library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaterialIntent {
    Select(String),
    Download(String),
    ToggleFavorite(String),
}

/// Library filter state kept locally by the material panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    pub query: String,
    pub category: Option<MaterialCategory>,
    pub favorites_only: bool,
}

impl MaterialFilter {
    /// Whether `material` passes every active criterion.
    #[must_use]
    pub fn matches(&self, material: &Material, shelf: &MaterialShelf) -> bool {
        if let Some(category) = self.category {
            if material.category != category {
                return false;
            }
        }
        if self.favorites_only && !shelf.is_favorite(&material.id) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty() || material.name.to_lowercase().contains(&query)
    }

    /// Materials passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, materials: &'a [Material], shelf: &MaterialShelf) -> Vec<&'a Material> {
        materials.iter().filter(|m| self.matches(m, shelf)).collect()
    }
}
