//! Scene model and UI coordination logic for the Brickyard creator interface.
//!
//! This crate owns everything the creator panels agree on: the scene object
//! list, the selection set, panel visibility, viewport settings, the typed
//! layout action vocabulary and the page controller that routes panel events
//! to state updates. It has no UI dependency so the `client` crate can render
//! it and the tests can drive it directly.

pub mod action;
pub mod breadcrumb;
pub mod controller;
pub mod editor;
pub mod error;
pub mod material;
pub mod object;
pub mod outliner;
pub mod panels;
pub mod playback;
pub mod properties;
pub mod selection;
pub mod shell;
pub mod telemetry;
pub mod viewport;

pub use action::LayoutAction;
pub use controller::{HostRequest, PageController};
pub use error::{ActionError, SceneError, StoreError};
pub use object::{ObjectKind, SceneObject};
pub use properties::{ObjectProperties, derive_properties};
pub use selection::Selection;
