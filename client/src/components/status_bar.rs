//! Bottom status bar showing scene telemetry and chrome state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure projection: reads telemetry derived from the page controller and the
//! shell's chrome state, and emits nothing.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;
use scene::shell::ShellState;
use scene::telemetry::Telemetry;

#[component]
pub fn StatusBar(
    #[prop(into)] telemetry: Signal<Telemetry>,
    #[prop(into)] shell: Signal<ShellState>,
) -> impl IntoView {
    let is_playing = move || shell.get().playback.is_playing();

    view! {
        <footer class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item">{move || format_fps(telemetry.get().fps)}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{move || format_memory(telemetry.get().memory_mb)}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{move || format_object_counts(&telemetry.get())}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{move || format_selection(telemetry.get().selected_count)}</span>
            </div>

            <div class="status-bar__spacer"></div>

            <div class="status-bar__section">
                <span class="status-bar__item">{move || shell.get().view_mode.label()}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">
                    {move || format_toggles(shell.get().grid_visible, shell.get().snap_enabled)}
                </span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item" class:status-bar__item--live=is_playing>
                    {move || shell.get().playback.label()}
                </span>
            </div>
        </footer>
    }
}

fn format_fps(fps: f64) -> String {
    format!("{fps:.0} FPS")
}

fn format_memory(memory_mb: f64) -> String {
    format!("{memory_mb:.1} MB")
}

fn format_object_counts(telemetry: &Telemetry) -> String {
    format!(
        "{} objects · {} visible · {} locked",
        telemetry.object_count, telemetry.visible_count, telemetry.locked_count
    )
}

fn format_selection(count: usize) -> String {
    match count {
        0 => "no selection".to_owned(),
        n => format!("{n} selected"),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

fn format_toggles(grid: bool, snap: bool) -> String {
    format!("GRID {} · SNAP {}", on_off(grid), on_off(snap))
}
