//! Layout shell chrome state (tool, shading, grid/snap, playback).
//!
//! DESIGN
//! ======
//! The shell keeps presentation toggles that the page controller does not
//! need to own. It never sees scene data; it only reacts to the same
//! [`LayoutAction`] values it forwards upward.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use serde::{Deserialize, Serialize};

use crate::action::LayoutAction;
use crate::playback::PlaybackState;
use crate::viewport::ViewMode;

/// Active editing tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolMode {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
    PlaceBrick,
    PlaceAnchor,
}

impl ToolMode {
    pub const ALL: [Self; 6] = [
        Self::Select,
        Self::Move,
        Self::Rotate,
        Self::Scale,
        Self::PlaceBrick,
        Self::PlaceAnchor,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Move => "move",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::PlaceBrick => "place-brick",
            Self::PlaceAnchor => "place-anchor",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Move => "Move",
            Self::Rotate => "Rotate",
            Self::Scale => "Scale",
            Self::PlaceBrick => "Brick",
            Self::PlaceAnchor => "Anchor",
        }
    }

    /// Keyboard hint shown in the toolbar tooltip.
    #[must_use]
    pub fn shortcut(self) -> char {
        match self {
            Self::Select => 'V',
            Self::Move => 'G',
            Self::Rotate => 'R',
            Self::Scale => 'S',
            Self::PlaceBrick => 'B',
            Self::PlaceAnchor => 'A',
        }
    }
}

/// Chrome state owned by the layout shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub active_tool: ToolMode,
    pub view_mode: ViewMode,
    pub grid_visible: bool,
    pub snap_enabled: bool,
    pub playback: PlaybackState,
    pub fullscreen: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_tool: ToolMode::Select,
            view_mode: ViewMode::Solid,
            grid_visible: true,
            snap_enabled: true,
            playback: PlaybackState::Idle,
            fullscreen: false,
        }
    }
}

impl ShellState {
    /// Update chrome state for `action`. Returns `false` when the action only
    /// concerns the page controller or the host.
    pub fn apply(&mut self, action: &LayoutAction) -> bool {
        if let Some(command) = action.playback_command() {
            self.playback = self.playback.apply(command);
            return true;
        }

        match action {
            LayoutAction::SetTool { tool } => self.active_tool = *tool,
            LayoutAction::SetViewMode { mode } => self.view_mode = *mode,
            LayoutAction::ToggleGrid => self.grid_visible = !self.grid_visible,
            LayoutAction::ToggleSnap => self.snap_enabled = !self.snap_enabled,
            LayoutAction::Fullscreen => self.fullscreen = !self.fullscreen,
            _ => return false,
        }
        true
    }
}
