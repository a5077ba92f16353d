//! Side-panel visibility flags.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use serde::{Deserialize, Serialize};

/// Side panels that can be shown or hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Properties,
    Outliner,
    Materials,
}

impl Panel {
    pub const ALL: [Self; 3] = [Self::Outliner, Self::Properties, Self::Materials];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Outliner => "outliner",
            Self::Materials => "materials",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Outliner => "Outliner",
            Self::Materials => "Materials",
        }
    }
}

/// Per-panel visibility. All panels start visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelVisibility {
    pub properties: bool,
    pub outliner: bool,
    pub materials: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            properties: true,
            outliner: true,
            materials: true,
        }
    }
}

impl PanelVisibility {
    #[must_use]
    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Properties => self.properties,
            Panel::Outliner => self.outliner,
            Panel::Materials => self.materials,
        }
    }

    /// Flip one panel and return its new visibility.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let slot = match panel {
            Panel::Properties => &mut self.properties,
            Panel::Outliner => &mut self.outliner,
            Panel::Materials => &mut self.materials,
        };
        *slot = !*slot;
        *slot
    }
}
