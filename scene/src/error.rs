//! Recoverable error conditions raised by the controller and collaborators.
//!
//! None of these are fatal. UI callbacks log them and keep the current state.

/// Error returned when a string-channel action cannot be turned into a
/// [`crate::LayoutAction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The action name is not part of the vocabulary.
    #[error("unknown layout action: {0}")]
    Unknown(String),
    /// The action name is known but its payload is missing or malformed.
    #[error("invalid payload for {action}: {message}")]
    InvalidPayload { action: String, message: String },
}

/// Error returned by scene edits and hardened selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// No object with this id exists in the scene.
    #[error("no scene object with id {0}")]
    UnknownObject(String),
    /// The object is locked and the edit would modify it.
    #[error("scene object {0} is locked")]
    Locked(String),
    /// A group was requested with no members.
    #[error("cannot create a group without members")]
    EmptyGroup,
    /// A property edit arrived while zero or several objects were selected.
    #[error("property edits need exactly one selected object")]
    NoSingleSelection,
}

/// Error returned by [`crate::editor::ProjectStore`] implementations and
/// material requests.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The material id is not in the catalog.
    #[error("no material with id {0}")]
    UnknownMaterial(String),
    /// The project snapshot could not be serialized.
    #[error("failed to serialize project snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
