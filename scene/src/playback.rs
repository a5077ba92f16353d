//! Construction playback state machine.
//!
//! Transitions are unconditional: every command is accepted from every state.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Stop,
}

impl PlaybackState {
    /// State after `command`.
    #[must_use]
    pub fn apply(self, command: PlaybackCommand) -> Self {
        match command {
            PlaybackCommand::Play => Self::Playing,
            PlaybackCommand::Pause => Self::Paused,
            PlaybackCommand::Stop => Self::Idle,
        }
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Playing => "BUILDING",
            Self::Paused => "PAUSED",
        }
    }
}
