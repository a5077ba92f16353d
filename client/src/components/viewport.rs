//! Viewport placeholder between the side panels.
//!
//! The AR renderer is not part of this crate; the placeholder mirrors the
//! chrome state so view mode, grid and playback changes are visible.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;
use scene::shell::ShellState;

#[component]
pub fn Viewport(
    #[prop(into)] shell: Signal<ShellState>,
    #[prop(into)] selected_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div
            class="viewport"
            class:viewport--grid=move || shell.get().grid_visible
            data-view-mode=move || shell.get().view_mode.as_str()
        >
            <div class="viewport__placeholder">
                <span class="viewport__title">"AR Viewport"</span>
                <span class="viewport__caption">
                    {move || viewport_caption(&shell.get(), selected_count.get())}
                </span>
            </div>
            <Show when=move || shell.get().playback.is_playing()>
                <span class="viewport__badge">"Construction running"</span>
            </Show>
        </div>
    }
}

fn viewport_caption(shell: &ShellState, selected: usize) -> String {
    format!(
        "{} view · {} tool · {} selected",
        shell.view_mode.label(),
        shell.active_tool.label(),
        selected
    )
}
