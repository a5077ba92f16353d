//! Mock telemetry shown by the status bar.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use crate::object::SceneObject;
use crate::selection::Selection;

pub const MOCK_FPS: f64 = 60.0;
pub const MOCK_BASE_MEMORY_MB: f64 = 96.0;
pub const MOCK_MEMORY_PER_OBJECT_MB: f64 = 2.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Telemetry {
    pub fps: f64,
    pub memory_mb: f64,
    pub object_count: usize,
    pub visible_count: usize,
    pub locked_count: usize,
    pub selected_count: usize,
}

impl Telemetry {
    /// Readings for the current scene. Frame rate is fixed; memory grows with
    /// the object count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mock(objects: &[SceneObject], selection: &Selection) -> Self {
        let object_count = objects.len();
        Self {
            fps: MOCK_FPS,
            memory_mb: MOCK_BASE_MEMORY_MB + MOCK_MEMORY_PER_OBJECT_MB * object_count as f64,
            object_count,
            visible_count: objects.iter().filter(|o| o.visible).count(),
            locked_count: objects.iter().filter(|o| o.locked).count(),
            selected_count: selection.len(),
        }
    }
}
