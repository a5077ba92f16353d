//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the creator chrome and panels. They never own scene
//! data: each receives read-only signals and reports user intent through a
//! callback prop.

pub mod breadcrumb;
pub mod layout_shell;
pub mod material_library;
pub mod property_inspector;
pub mod scene_outliner;
pub mod status_bar;
pub mod toolbar;
pub mod viewport;
