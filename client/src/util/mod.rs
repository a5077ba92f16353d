//! Browser helpers shared by pages and components.

pub mod fullscreen;
