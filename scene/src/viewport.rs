//! Viewport display settings shared by the shell and the controller.

use serde::{Deserialize, Serialize};

/// How the placeholder viewport would shade geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Wireframe,
    #[default]
    Solid,
    Textured,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Wireframe, Self::Solid, Self::Textured];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wireframe => "wireframe",
            Self::Solid => "solid",
            Self::Textured => "textured",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wireframe => "Wireframe",
            Self::Solid => "Solid",
            Self::Textured => "Textured",
        }
    }
}

/// Grid, snap and shading settings owned by the page controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSettings {
    pub grid_visible: bool,
    pub snap_enabled: bool,
    pub view_mode: ViewMode,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            grid_visible: true,
            snap_enabled: true,
            view_mode: ViewMode::Solid,
        }
    }
}
