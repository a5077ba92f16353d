//! Typed layout action vocabulary.
//!
//! ARCHITECTURE
//! ============
//! Every chrome control (toolbar, breadcrumb, panel headers) reports through
//! one upward channel. The channel carries a closed enum instead of a
//! `(name, data)` pair; the string form is only parsed at the host boundary by
//! [`LayoutAction::from_parts`].

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;
use crate::panels::Panel;
use crate::playback::PlaybackCommand;
use crate::shell::ToolMode;
use crate::viewport::ViewMode;

/// Wire names of every action, in toolbar order.
pub const ACTION_NAMES: &[&str] = &[
    "new-project",
    "save-project",
    "toggle-panel",
    "set-tool",
    "set-view-mode",
    "toggle-grid",
    "toggle-snap",
    "start-construction",
    "pause-construction",
    "stop-construction",
    "fullscreen",
    "back",
    "navigate",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "kebab-case")]
pub enum LayoutAction {
    NewProject,
    SaveProject,
    TogglePanel { panel: Panel },
    SetTool { tool: ToolMode },
    SetViewMode { mode: ViewMode },
    ToggleGrid,
    ToggleSnap,
    StartConstruction,
    PauseConstruction,
    StopConstruction,
    Fullscreen,
    /// Leave the creator interface.
    Back,
    /// Ask the host to change route.
    Navigate { path: String },
}

impl LayoutAction {
    /// Parse the `(name, data)` form used by string-keyed hosts.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Unknown`] for names outside [`ACTION_NAMES`] and
    /// [`ActionError::InvalidPayload`] when a payload field is missing or has
    /// the wrong shape. Payloads on actions that take none are ignored.
    pub fn from_parts(name: &str, data: Option<&Value>) -> Result<Self, ActionError> {
        match name {
            "new-project" => Ok(Self::NewProject),
            "save-project" => Ok(Self::SaveProject),
            "toggle-panel" => Ok(Self::TogglePanel {
                panel: payload_field(name, data, "panel")?,
            }),
            "set-tool" => Ok(Self::SetTool {
                tool: payload_field(name, data, "tool")?,
            }),
            "set-view-mode" => Ok(Self::SetViewMode {
                mode: payload_field(name, data, "mode")?,
            }),
            "toggle-grid" => Ok(Self::ToggleGrid),
            "toggle-snap" => Ok(Self::ToggleSnap),
            "start-construction" => Ok(Self::StartConstruction),
            "pause-construction" => Ok(Self::PauseConstruction),
            "stop-construction" => Ok(Self::StopConstruction),
            "fullscreen" => Ok(Self::Fullscreen),
            "back" => Ok(Self::Back),
            "navigate" => Ok(Self::Navigate {
                path: payload_field(name, data, "path")?,
            }),
            other => Err(ActionError::Unknown(other.to_owned())),
        }
    }

    /// Wire name of this action.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewProject => "new-project",
            Self::SaveProject => "save-project",
            Self::TogglePanel { .. } => "toggle-panel",
            Self::SetTool { .. } => "set-tool",
            Self::SetViewMode { .. } => "set-view-mode",
            Self::ToggleGrid => "toggle-grid",
            Self::ToggleSnap => "toggle-snap",
            Self::StartConstruction => "start-construction",
            Self::PauseConstruction => "pause-construction",
            Self::StopConstruction => "stop-construction",
            Self::Fullscreen => "fullscreen",
            Self::Back => "back",
            Self::Navigate { .. } => "navigate",
        }
    }

    /// Playback command carried by construction actions.
    #[must_use]
    pub fn playback_command(&self) -> Option<PlaybackCommand> {
        match self {
            Self::StartConstruction => Some(PlaybackCommand::Play),
            Self::PauseConstruction => Some(PlaybackCommand::Pause),
            Self::StopConstruction => Some(PlaybackCommand::Stop),
            _ => None,
        }
    }
}

fn payload_field<T: DeserializeOwned>(
    action: &str,
    data: Option<&Value>,
    key: &str,
) -> Result<T, ActionError> {
    let Some(value) = data.and_then(|d| d.get(key)) else {
        return Err(ActionError::InvalidPayload {
            action: action.to_owned(),
            message: format!("missing field `{key}`"),
        });
    };
    serde_json::from_value(value.clone()).map_err(|e| ActionError::InvalidPayload {
        action: action.to_owned(),
        message: format!("field `{key}`: {e}"),
    })
}
